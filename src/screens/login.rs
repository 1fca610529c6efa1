//! Login Screen
//!
//! Email/password form. A successful login moves to the dashboard; the session
//! cookie the backend sets stays with the client.

use super::{first_blank, form_error, Navigation, Route};
use crate::api::{LoginRequest, OverviewApi};

/// Fallback when the backend rejects a login without an `error` message
pub const LOGIN_FAILED: &str = "Login failed";

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
}

impl LoginScreen {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Error text shown above the form
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Logging in..."
        } else {
            "Login"
        }
    }

    /// First required field left blank
    pub fn missing_field(&self) -> Option<&'static str> {
        first_blank(&[("Email", self.email.as_str()), ("Password", self.password.as_str())])
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.missing_field().is_none()
    }

    /// Submit the form.
    ///
    /// Returns where to go next on success. On failure the error text is set and
    /// the form stays ready for another attempt.
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

        let request = LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        let outcome = match api.login(&request).await {
            Ok(()) => {
                tracing::info!(email = %self.email, "Logged in");
                Some(Navigation::Push(Route::Dashboard))
            }
            Err(e) => {
                self.error = Some(form_error("login", &e, LOGIN_FAILED));
                None
            }
        };

        self.loading = false;
        outcome
    }
}
