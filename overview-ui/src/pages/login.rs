//! Login Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Backdrop, FormField, InlineLoading};
use crate::state::messages::{form_error, missing_field, LOGIN_FAILED};

#[component]
pub fn Login() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let loading = create_rw_signal(false);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Some(field) = missing_field(&[
            ("Email", email_value.as_str()),
            ("Password", password_value.as_str()),
        ]) {
            error.set(Some(format!("{} is required", field)));
            return;
        }

        loading.set(true);
        error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(()) => navigate("/dashboard", Default::default()),
                Err(e) => {
                    if !matches!(e, api::ApiFailure::Rejected { .. }) {
                        web_sys::console::error_1(&format!("Login error: {}", e).into());
                    }
                    error.set(Some(form_error(&e, LOGIN_FAILED)));
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
                <h1 class="text-3xl font-bold text-center">"Login"</h1>

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
                            <span>"Logging in..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Login"</span> }.into_view()
                    }}
                </button>

                <p class="text-center text-sm text-gray-400">
                    "Don't have an account? "
                    <A href="/register" class="text-indigo-400 hover:underline">"Register"</A>
                </p>
            </form>
        </Backdrop>
    }
}
