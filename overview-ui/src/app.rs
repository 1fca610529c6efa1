//! App Root Component
//!
//! Routing between the four screens.

use leptos::*;
use leptos_router::*;

use crate::pages::{Dashboard, Home, Login, Register};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-gray-950 text-white">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
