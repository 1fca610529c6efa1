//! Backend API
//!
//! Typed access to the File Overview backend.
//!
//! ## Endpoints
//!
//! - `POST /login` - JSON credentials, sets the `session_id` cookie
//! - `POST /register` - JSON account details
//! - `POST /upload` - multipart `{file, model}`, returns the overview
//! - `POST /files` - upload history for the session user
//! - `GET /overview?file=<name>` - previously generated overview
//! - `GET /health` - liveness
//!
//! Screens talk to the backend only through [`OverviewApi`], so they can run
//! against [`HttpClient`] or an in-memory double.

mod client;
pub mod dto;
mod error;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{ClientConfig, HttpClient, SESSION_COOKIE};
pub use dto::{
    FileEntry, FileListResponse, HealthResponse, LoginRequest, Model, OverviewResponse,
    RegisterRequest, UploadFile, UploadResponse,
};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

/// Operations the backend offers to the client
#[async_trait]
pub trait OverviewApi: Send + Sync {
    /// Authenticate; on success the session cookie is held by the client
    async fn login(&self, request: &LoginRequest) -> ApiResult<()>;

    /// Create an account
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;

    /// Upload a file and return the generated overview, if the backend sent one
    async fn upload(&self, file: &UploadFile, model: Model) -> ApiResult<Option<String>>;

    /// List previously uploaded files
    async fn list_files(&self) -> ApiResult<Vec<FileEntry>>;

    /// Retrieve the stored overview for one file
    async fn fetch_overview(&self, file_name: &str) -> ApiResult<String>;

    /// Check that the backend is up
    async fn health(&self) -> ApiResult<HealthResponse>;
}
