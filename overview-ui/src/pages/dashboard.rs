//! Dashboard Page
//!
//! Upload form and overview panel beside the upload history.

use leptos::*;

use crate::components::{HistorySidebar, OverviewPanel, UploadForm};
use crate::state::DashboardState;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = DashboardState::new();

    // Fetch history on mount
    create_effect(move |_| state.refresh_history());

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Upload a file and pick a model to generate its overview"</p>
            </div>

            <div class="flex flex-col md:flex-row gap-8">
                <HistorySidebar state=state />
                <div class="flex-1 space-y-8">
                    <UploadForm state=state />
                    <OverviewPanel state=state />
                </div>
            </div>
        </div>
    }
}
