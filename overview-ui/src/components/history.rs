//! History Sidebar
//!
//! Previously uploaded files. Clicking an entry shows its overview.

use leptos::*;

use crate::state::messages::{HISTORY_EMPTY, HISTORY_LOADING};
use crate::state::DashboardState;

#[component]
pub fn HistorySidebar(state: DashboardState) -> impl IntoView {
    view! {
        <aside class="bg-gray-900 rounded-xl p-6 md:w-72 shrink-0">
            <h2 class="text-lg font-semibold mb-4">"History"</h2>
            {move || {
                if state.history_loading.get() {
                    view! { <p class="text-gray-400 text-sm">{HISTORY_LOADING}</p> }.into_view()
                } else if state.files.with(Vec::is_empty) {
                    view! { <p class="text-gray-400 text-sm">{HISTORY_EMPTY}</p> }.into_view()
                } else {
                    view! {
                        <ul class="space-y-1">
                            {state.files.get().into_iter().map(|entry| {
                                let name = entry.name.clone();
                                view! {
                                    <li>
                                        <button
                                            class="w-full text-left px-3 py-2 rounded-lg hover:bg-gray-800 transition-colors"
                                            on:click=move |_| state.open_entry(name.clone())
                                        >
                                            <span class="block truncate">{entry.name.clone()}</span>
                                            {entry.uploaded_label().map(|when| view! {
                                                <span class="block text-xs text-gray-500">{when}</span>
                                            })}
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}
        </aside>
    }
}
