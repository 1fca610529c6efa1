//! API Error Types
//!
//! Errors returned by backend calls. The split that matters to the screens is
//! between a response the server rejected (non-2xx, possibly with an `error`
//! message) and everything else (transport, decoding, local I/O).

use thiserror::Error;

/// Errors that can occur when calling the backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("no error message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// Backend could not be reached
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Base URL or endpoint could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading the upload file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Classify a reqwest transport error
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err)
        }
    }

    /// Whether the server answered and refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }

    /// The server-supplied `error` text, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
