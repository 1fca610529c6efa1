//! Screens
//!
//! State and behaviour of the four screens: home, login, register and
//! dashboard. Each screen owns its own transient state (form fields, loading
//! flags, result text) and talks to the backend through [`OverviewApi`].
//! Nothing is shared between screens; moving between them is expressed as a
//! [`Navigation`] returned from the operation that triggers it.
//!
//! Failures follow the same two tiers everywhere: a rejected request shows the
//! server's `error` text (or a per-screen fallback), anything else is logged and
//! shows a generic message.
//!
//! [`OverviewApi`]: crate::api::OverviewApi

mod dashboard;
mod home;
mod login;
mod register;

pub use dashboard::{DashboardScreen, HistoryView, OpenMode};
pub use home::{Feature, HomeScreen};
pub use login::LoginScreen;
pub use register::RegisterScreen;

use crate::api::ApiError;

/// Generic message for failures the server did not explain
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// How to leave the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Client-side route change
    Push(Route),
    /// Full page reload at the route
    Reload(Route),
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::Push(route) | Navigation::Reload(route) => *route,
        }
    }
}

/// Message to show for a failed form submission
fn form_error(operation: &'static str, err: &ApiError, fallback: &str) -> String {
    if err.is_rejection() {
        err.server_message().unwrap_or(fallback).to_string()
    } else {
        tracing::error!(operation, error = %err, "Request failed");
        SOMETHING_WENT_WRONG.to_string()
    }
}

/// Name of the first required field left empty; whitespace counts as a value
fn first_blank(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
}
