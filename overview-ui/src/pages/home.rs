//! Home Page
//!
//! Landing content with links to login and registration.

use leptos::*;
use leptos_router::*;

use crate::components::Backdrop;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Backdrop>
            <div class="max-w-3xl mx-auto text-center space-y-10">
                <div>
                    <h1 class="text-5xl font-bold mb-4">"File Overview System"</h1>
                    <p class="text-lg text-gray-300">
                        "Upload your files and let AI generate smart overviews instantly."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-6 text-left">
                    <FeatureCard
                        title="Upload any file"
                        description="Drag & drop or browse your files. Documents, PDFs, and more."
                    />
                    <FeatureCard
                        title="AI-powered insights"
                        description="Get concise summaries and highlights from our LLM instantly."
                    />
                </div>

                <div class="flex justify-center gap-4">
                    <A
                        href="/login"
                        class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                    >
                        "Login"
                    </A>
                    <A
                        href="/register"
                        class="px-6 py-3 border border-gray-600 hover:bg-gray-800 rounded-lg font-medium transition-colors"
                    >
                        "Register"
                    </A>
                </div>
            </div>
        </Backdrop>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-900/70 backdrop-blur rounded-xl p-6">
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-400">{description}</p>
        </div>
    }
}
