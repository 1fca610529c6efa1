//! Register Page
//!
//! Success reloads the browser at `/login`.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Backdrop, FormField, InlineLoading};
use crate::state::messages::{form_error, missing_field, REGISTRATION_FAILED};

#[component]
pub fn Register() -> impl IntoView {
    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let loading = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let username_value = username.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Some(field) = missing_field(&[
            ("Username", username_value.as_str()),
            ("Email", email_value.as_str()),
            ("Password", password_value.as_str()),
        ]) {
            error.set(Some(format!("{} is required", field)));
            return;
        }

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api::register(&username_value, &email_value, &password_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => {
                    if !matches!(e, api::ApiFailure::Rejected { .. }) {
                        web_sys::console::error_1(&format!("Registration error: {}", e).into());
                    }
                    error.set(Some(form_error(&e, REGISTRATION_FAILED)));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <Backdrop>
            <form
                on:submit=on_submit
                class="max-w-md mx-auto bg-gray-900/80 backdrop-blur rounded-xl p-8 space-y-5"
            >
                <h1 class="text-3xl font-bold text-center">"Register"</h1>

                <FormField label="Username" value=username />
                <FormField label="Email" input_type="email" value=email />
                <FormField label="Password" input_type="password" value=password />

                {move || error.get().map(|message| view! {
                    <p class="text-red-400 text-sm">{message}</p>
                })}

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if loading.get() {
                        view! {
                            <InlineLoading />
                            <span>"Registering..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Register"</span> }.into_view()
                    }}
                </button>

                <p class="text-center text-sm text-gray-400">
                    "Already have an account? "
                    <A href="/login" class="text-indigo-400 hover:underline">"Login"</A>
                </p>
            </form>
        </Backdrop>
    }
}
