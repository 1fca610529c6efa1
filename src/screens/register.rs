//! Register Screen
//!
//! Account creation form. Success reloads into the login screen.

use super::{first_blank, form_error, Navigation, Route};
use crate::api::{OverviewApi, RegisterRequest};

/// Fallback when the backend rejects a registration without an `error` message
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Registration form state
#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    pub username: String,
    pub email: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
}

impl RegisterScreen {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Registering..."
        } else {
            "Register"
        }
    }

    pub fn missing_field(&self) -> Option<&'static str> {
        first_blank(&[
            ("Username", self.username.as_str()),
            ("Email", self.email.as_str()),
            ("Password", self.password.as_str()),
        ])
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.missing_field().is_none()
    }

    /// Submit the form; success reloads at the login route
    pub async fn submit(&mut self, api: &dyn OverviewApi) -> Option<Navigation> {
        if self.loading {
            return None;
        }
        if let Some(field) = self.missing_field() {
            self.error = Some(format!("{} is required", field));
            return None;
        }

        self.loading = true;
        self.error = None;

        let request = RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };

        let outcome = match api.register(&request).await {
            Ok(()) => {
                tracing::info!(username = %self.username, "Registered");
                Some(Navigation::Reload(Route::Login))
            }
            Err(e) => {
                self.error = Some(form_error("register", &e, REGISTRATION_FAILED));
                None
            }
        };

        self.loading = false;
        outcome
    }
}
