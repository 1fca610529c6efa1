//! HTTP API Client
//!
//! Functions for calling the overview backend. Every request includes browser
//! credentials so the backend's `session_id` cookie travels with it.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use super::types::{
    ErrorBody, FileEntry, FilesResponse, LoginRequest, Model, OverviewResponse, RegisterRequest,
    UploadResponse,
};

/// Default backend origin
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Local storage key that overrides the backend origin
pub const API_URL_STORAGE_KEY: &str = "overview_api_url";

/// Get the backend origin from local storage, the build environment, or the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten());

    let url = stored
        .or_else(|| option_env!("OVERVIEW_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Why a call did not produce a result
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// The backend answered with a non-2xx status
    Rejected { status: u16, message: Option<String> },
    /// The request never completed
    Network(String),
    /// The response body could not be read
    Decode(String),
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiFailure::Rejected { status, message } => write!(
                f,
                "Rejected ({}): {}",
                status,
                message.as_deref().unwrap_or("no error message")
            ),
            ApiFailure::Network(e) => write!(f, "Network error: {}", e),
            ApiFailure::Decode(e) => write!(f, "Parse error: {}", e),
        }
    }
}

fn credentialed(builder: RequestBuilder) -> RequestBuilder {
    builder.credentials(RequestCredentials::Include)
}

/// Turn a non-2xx response into a rejection carrying the body's `error` text
async fn check(response: Response) -> Result<Response, ApiFailure> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap_or_default();
    Err(ApiFailure::Rejected {
        status,
        message: body.error.filter(|m| !m.is_empty()),
    })
}

async fn send(request: Request) -> Result<Response, ApiFailure> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;
    check(response).await
}

// ============ API Functions ============

/// Log in; the backend sets the session cookie on success
pub async fn login(email: &str, password: &str) -> Result<(), ApiFailure> {
    let request = credentialed(Request::post(&format!("{}/login", get_api_base())))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    send(request).await.map(|_| ())
}

/// Create an account
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiFailure> {
    let request = credentialed(Request::post(&format!("{}/register", get_api_base())))
        .json(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    send(request).await.map(|_| ())
}

/// Upload a file as multipart `{file, model}`; returns the generated overview
pub async fn upload(file: &web_sys::File, model: Model) -> Result<Option<String>, ApiFailure> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiFailure::Network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiFailure::Network(format!("{:?}", e)))?;
    form.append_with_str("model", model.id())
        .map_err(|e| ApiFailure::Network(format!("{:?}", e)))?;

    let request = credentialed(Request::post(&format!("{}/upload", get_api_base())))
        .body(form)
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    let result: UploadResponse = send(request)
        .await?
        .json()
        .await
        .map_err(|e| ApiFailure::Decode(e.to_string()))?;

    Ok(result.overview.filter(|o| !o.is_empty()))
}

/// Fetch the upload history
pub async fn fetch_files() -> Result<Vec<FileEntry>, ApiFailure> {
    let response = credentialed(Request::post(&format!("{}/files", get_api_base())))
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    let result: FilesResponse = check(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiFailure::Decode(e.to_string()))?;

    Ok(result.files)
}

/// Fetch the stored overview of an uploaded file
pub async fn fetch_overview(file_name: &str) -> Result<String, ApiFailure> {
    let response = credentialed(Request::get(&format!("{}/overview", get_api_base())))
        .query([("file", file_name)])
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

    let result: OverviewResponse = check(response)
        .await?
        .json()
        .await
        .map_err(|e| ApiFailure::Decode(e.to_string()))?;

    Ok(result.summary)
}
