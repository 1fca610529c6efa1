//! Upload Form
//!
//! Drop zone, model selector and the upload button.

use leptos::*;

use crate::api::Model;
use crate::components::InlineLoading;
use crate::state::messages::DROP_ZONE_PROMPT;
use crate::state::DashboardState;

#[component]
pub fn UploadForm(state: DashboardState) -> impl IntoView {
    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            state.file.set(Some(file));
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            state.file.set(Some(file));
        }
    };

    view! {
        <section class="bg-gray-900 rounded-xl p-6 space-y-4">
            <label
                class="block border-2 border-dashed border-gray-700 hover:border-indigo-500 rounded-xl
                       p-10 text-center cursor-pointer transition-colors"
                on:dragover=|ev: web_sys::DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                <input type="file" class="hidden" on:change=on_file_change />
                <span class="text-gray-300">
                    {move || {
                        state.file.with(|file| {
                            file.as_ref()
                                .map(|f| f.name())
                                .unwrap_or_else(|| DROP_ZONE_PROMPT.to_string())
                        })
                    }}
                </span>
            </label>

            <div class="flex flex-col sm:flex-row gap-4">
                <select
                    class="bg-gray-800 border border-gray-700 rounded-lg px-4 py-2"
                    on:change=move |ev| state.model.set(Model::from_id(&event_target_value(&ev)))
                >
                    {Model::ALL.into_iter().map(|model| view! {
                        <option
                            value=model.id()
                            selected=move || state.model.get() == model
                        >
                            {model.label()}
                        </option>
                    }).collect_view()}
                </select>

                <button
                    type="button"
                    disabled=move || !state.can_upload()
                    on:click=move |_| state.upload()
                    class="flex-1 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-2 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if state.loading.get() {
                        view! {
                            <InlineLoading />
                            <span>"Processing..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Upload & Generate Overview"</span> }.into_view()
                    }}
                </button>
            </div>
        </section>
    }
}
