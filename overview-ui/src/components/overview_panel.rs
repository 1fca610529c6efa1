//! Overview Panel

use leptos::*;

use crate::state::DashboardState;

/// Generated or stored overview text
#[component]
pub fn OverviewPanel(state: DashboardState) -> impl IntoView {
    view! {
        <section class="bg-gray-900 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Overview"</h2>
            <pre class="whitespace-pre-wrap text-gray-200 font-sans">
                {move || state.overview_text()}
            </pre>
        </section>
    }
}
