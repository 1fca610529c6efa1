//! Backdrop
//!
//! Blurred colour blobs behind the auth and landing screens.

use leptos::*;

#[component]
pub fn Backdrop(children: Children) -> impl IntoView {
    view! {
        <div class="relative min-h-screen overflow-hidden flex items-center justify-center px-4">
            <div class="blob absolute -top-24 -left-24 w-96 h-96 bg-purple-600 rounded-full" />
            <div class="blob absolute top-1/3 -right-24 w-96 h-96 bg-indigo-600 rounded-full" />
            <div class="blob absolute -bottom-24 left-1/3 w-96 h-96 bg-pink-600 rounded-full" />
            <div class="relative z-10 w-full">{children()}</div>
        </div>
    }
}
