//! In-memory [`OverviewApi`] for screen tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::dto::{FileEntry, HealthResponse, LoginRequest, Model, RegisterRequest, UploadFile};
use super::{ApiError, ApiResult, OverviewApi};

/// Canned outcome for one endpoint
#[derive(Clone)]
pub(crate) enum Reply<T> {
    Ok(T),
    Rejected(u16, Option<&'static str>),
    Unavailable,
}

impl<T: Clone> Reply<T> {
    fn result(&self) -> ApiResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Rejected(status, message) => Err(ApiError::Rejected {
                status: *status,
                message: message.map(str::to_string),
            }),
            Reply::Unavailable => Err(ApiError::Unavailable("connection refused".to_string())),
        }
    }
}

/// Counts calls per endpoint and answers with canned replies
pub(crate) struct MockApi {
    pub login: Reply<()>,
    pub register: Reply<()>,
    pub upload: Reply<Option<String>>,
    pub files: Reply<Vec<FileEntry>>,
    pub overview: Reply<String>,

    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub files_calls: AtomicUsize,
    pub overview_calls: AtomicUsize,

    pub last_login: Mutex<Option<(String, String)>>,
    pub last_upload: Mutex<Option<(String, Model)>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            login: Reply::Ok(()),
            register: Reply::Ok(()),
            upload: Reply::Ok(None),
            files: Reply::Ok(Vec::new()),
            overview: Reply::Ok(String::new()),
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            upload_calls: AtomicUsize::new(0),
            files_calls: AtomicUsize::new(0),
            overview_calls: AtomicUsize::new(0),
            last_login: Mutex::new(None),
            last_upload: Mutex::new(None),
        }
    }
}

impl MockApi {
    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        [
            &self.login_calls,
            &self.register_calls,
            &self.upload_calls,
            &self.files_calls,
            &self.overview_calls,
        ]
        .iter()
        .map(|c| Self::calls(c))
        .sum()
    }
}

#[async_trait]
impl OverviewApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<()> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_login.lock().unwrap() = Some((request.email.clone(), request.password.clone()));
        self.login.result()
    }

    async fn register(&self, _request: &RegisterRequest) -> ApiResult<()> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.register.result()
    }

    async fn upload(&self, file: &UploadFile, model: Model) -> ApiResult<Option<String>> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_upload.lock().unwrap() = Some((file.name.clone(), model));
        self.upload.result()
    }

    async fn list_files(&self) -> ApiResult<Vec<FileEntry>> {
        self.files_calls.fetch_add(1, Ordering::SeqCst);
        self.files.result()
    }

    async fn fetch_overview(&self, _file_name: &str) -> ApiResult<String> {
        self.overview_calls.fetch_add(1, Ordering::SeqCst);
        self.overview.result()
    }

    async fn health(&self) -> ApiResult<HealthResponse> {
        Ok(HealthResponse {
            message: Some("ok".to_string()),
        })
    }
}
