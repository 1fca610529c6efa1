//! Form Field
//!
//! Labelled input bound to a string signal.

use leptos::*;

#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-300 mb-1">{label}</span>
            <input
                type=input_type
                required=true
                class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2
                       focus:outline-none focus:border-indigo-500"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
