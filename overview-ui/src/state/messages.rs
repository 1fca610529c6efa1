//! Screen Messages
//!
//! Every user-facing string and the rules that pick one for a call outcome.
//! Kept free of browser APIs so it tests natively.

use crate::api::ApiFailure;

pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";
pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub const OVERVIEW_PLACEHOLDER: &str = "Your file overview will appear here.";
pub const NO_OVERVIEW_RECEIVED: &str = "No overview received.";
pub const UPLOAD_FAILED: &str = "Error: Failed to generate overview.";
pub const UPLOAD_WENT_WRONG: &str = "Something went wrong while uploading.";
pub const OVERVIEW_FETCH_FAILED: &str = "Error: Failed to fetch overview.";
pub const DROP_ZONE_PROMPT: &str = "Drag & drop a file here, or click to browse";
pub const HISTORY_LOADING: &str = "Loading history...";
pub const HISTORY_EMPTY: &str = "No files uploaded yet.";

/// Error text for a failed login or registration form
pub fn form_error(failure: &ApiFailure, fallback: &str) -> String {
    match failure {
        ApiFailure::Rejected { message, .. } => {
            message.clone().unwrap_or_else(|| fallback.to_string())
        }
        ApiFailure::Network(_) | ApiFailure::Decode(_) => SOMETHING_WENT_WRONG.to_string(),
    }
}

/// Overview text after an upload attempt
pub fn upload_result(outcome: &Result<Option<String>, ApiFailure>) -> String {
    match outcome {
        Ok(Some(overview)) => overview.clone(),
        Ok(None) => NO_OVERVIEW_RECEIVED.to_string(),
        Err(ApiFailure::Rejected { .. }) => UPLOAD_FAILED.to_string(),
        Err(_) => UPLOAD_WENT_WRONG.to_string(),
    }
}

/// Overview text after looking up a history entry
pub fn lookup_result(outcome: Result<String, ApiFailure>) -> String {
    match outcome {
        Ok(summary) => summary,
        Err(ApiFailure::Rejected { .. }) => OVERVIEW_FETCH_FAILED.to_string(),
        Err(_) => SOMETHING_WENT_WRONG.to_string(),
    }
}

/// Placeholder overview shown when history lookups are disabled
pub fn preview_text(file_name: &str) -> String {
    format!("Overview for: {}\n\n(Click would fetch from backend)", file_name)
}

/// First required field left empty, by label; whitespace counts as a value
pub fn missing_field(fields: &[(&'static str, &str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(label, _)| *label)
}

/// Whether opening a history entry asks the backend.
///
/// Builds with `OVERVIEW_FETCH_OVERVIEWS=false` show the local preview instead.
pub fn fetch_overviews() -> bool {
    !matches!(option_env!("OVERVIEW_FETCH_OVERVIEWS"), Some("false") | Some("0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(message: Option<&str>) -> ApiFailure {
        ApiFailure::Rejected {
            status: 401,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_form_error() {
        assert_eq!(form_error(&rejected(Some("Invalid password")), LOGIN_FAILED), "Invalid password");
        assert_eq!(form_error(&rejected(None), LOGIN_FAILED), LOGIN_FAILED);
        assert_eq!(
            form_error(&ApiFailure::Network("offline".into()), REGISTRATION_FAILED),
            SOMETHING_WENT_WRONG
        );
    }

    #[test]
    fn test_upload_result() {
        assert_eq!(upload_result(&Ok(Some("Summary".into()))), "Summary");
        assert_eq!(upload_result(&Ok(None)), NO_OVERVIEW_RECEIVED);
        assert_eq!(upload_result(&Err(rejected(None))), UPLOAD_FAILED);
        assert_eq!(
            upload_result(&Err(ApiFailure::Decode("eof".into()))),
            UPLOAD_WENT_WRONG
        );
    }

    #[test]
    fn test_lookup_result() {
        assert_eq!(lookup_result(Ok("Stored".into())), "Stored");
        assert_eq!(lookup_result(Err(rejected(Some("Not found")))), OVERVIEW_FETCH_FAILED);
        assert_eq!(
            lookup_result(Err(ApiFailure::Network("offline".into()))),
            SOMETHING_WENT_WRONG
        );
    }

    #[test]
    fn test_preview_text() {
        assert_eq!(
            preview_text("report.pdf"),
            "Overview for: report.pdf\n\n(Click would fetch from backend)"
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(missing_field(&[("Email", "a@b.c"), ("Password", "")]), Some("Password"));
        assert_eq!(missing_field(&[("Email", "a@b.c"), ("Password", "  ")]), None);
        assert_eq!(missing_field(&[("Email", "a@b.c"), ("Password", "x")]), None);
    }
}
