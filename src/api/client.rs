//! HTTP Client
//!
//! reqwest-based implementation of [`OverviewApi`]. One client per backend
//! origin, with a cookie jar holding the `session_id` cookie the backend sets
//! on login. Every request includes that jar's cookies.

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use super::dto::{
    ErrorBody, FileEntry, FileListResponse, HealthResponse, LoginRequest, Model,
    OverviewResponse, RegisterRequest, UploadFile, UploadResponse,
};
use super::{ApiError, ApiResult, OverviewApi};

/// Name of the cookie that carries the backend session
pub const SESSION_COOKIE: &str = "session_id";

/// Header used to correlate client and server logs
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 30_000,
            user_agent: format!("file-overview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Backend client
pub struct HttpClient {
    client: Client,
    jar: Arc<Jar>,
    origin: Url,
    base_url: String,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client for the configured backend origin
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            client,
            jar,
            origin,
            base_url,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Normalized backend origin, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current session token, if the backend has set one
    pub fn session_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.origin)?;
        let header = header.to_str().ok()?;
        header
            .split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
            .map(str::to_string)
    }

    /// Put a previously saved session token back into the cookie jar
    pub fn restore_session(&self, token: &str) {
        let cookie = format!("{}={}; Path=/", SESSION_COOKIE, token);
        self.jar.add_cookie_str(&cookie, &self.origin);
        tracing::debug!("Restored session cookie for {}", self.base_url);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request, tagging it with a request id and mapping failures
    async fn send(&self, operation: &'static str, builder: RequestBuilder) -> ApiResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(request_id = %request_id, operation, "Sending request");

        let response = builder
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(request_id = %request_id, operation, error = %e, "Transport failure");
                ApiError::from_transport(e)
            })?;

        let status = response.status();
        tracing::debug!(
            request_id = %request_id,
            operation,
            status = status.as_u16(),
            "Response received"
        );

        if status.is_success() {
            return Ok(response);
        }

        // A body that is not JSON counts as "no message"
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body.error.filter(|m| !m.trim().is_empty());

        tracing::warn!(
            request_id = %request_id,
            operation,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "Request rejected"
        );

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(ApiError::from_transport)
    }
}

#[async_trait]
impl OverviewApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<()> {
        let builder = self.client.post(self.url("/login")).json(request);
        self.send("login", builder).await?;

        if self.session_token().is_none() {
            tracing::warn!("Login succeeded but no {} cookie was set", SESSION_COOKIE);
        }
        Ok(())
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        let builder = self.client.post(self.url("/register")).json(request);
        self.send("register", builder).await?;
        Ok(())
    }

    async fn upload(&self, file: &UploadFile, model: Model) -> ApiResult<Option<String>> {
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new()
            .part("file", part)
            .text("model", model.as_str().to_string());

        tracing::info!(
            file = %file.name,
            size = file.size(),
            model = %model,
            "Uploading file"
        );

        let builder = self.client.post(self.url("/upload")).multipart(form);
        let response = self.send("upload", builder).await?;
        let result: UploadResponse = Self::decode(response).await?;

        Ok(result.overview.filter(|o| !o.is_empty()))
    }

    async fn list_files(&self) -> ApiResult<Vec<FileEntry>> {
        let builder = self.client.post(self.url("/files"));
        let response = self.send("list_files", builder).await?;
        let result: FileListResponse = Self::decode(response).await?;
        Ok(result.files)
    }

    async fn fetch_overview(&self, file_name: &str) -> ApiResult<String> {
        let url = format!(
            "{}?file={}",
            self.url("/overview"),
            urlencoding::encode(file_name)
        );
        let response = self.send("fetch_overview", self.client.get(url)).await?;
        let result: OverviewResponse = Self::decode(response).await?;
        Ok(result.summary)
    }

    async fn health(&self) -> ApiResult<HealthResponse> {
        let response = self.send("health", self.client.get(self.url("/health"))).await?;
        let text = response.text().await.map_err(ApiError::from_transport)?;

        // Older backends answer with plain text
        Ok(serde_json::from_str(&text).unwrap_or(HealthResponse {
            message: Some(text.trim().to_string()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Multipart, Query, State},
        http::{header, HeaderMap, StatusCode},
        response::{IntoResponse, Response as AxumResponse},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    const TOKEN: &str = "tok-123";

    #[derive(Default)]
    struct Seen {
        request_ids: Vec<String>,
        upload: Option<(String, String, usize)>,
    }

    type Shared = Arc<Mutex<Seen>>;

    fn has_session(headers: &HeaderMap) -> bool {
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(|c| c.contains(&format!("{}={}", SESSION_COOKIE, TOKEN)))
            .unwrap_or(false)
    }

    fn record_id(state: &Shared, headers: &HeaderMap) {
        if let Some(id) = headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
            state.lock().unwrap().request_ids.push(id.to_string());
        }
    }

    fn denied() -> AxumResponse {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "access denied"}))).into_response()
    }

    async fn login(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> AxumResponse {
        record_id(&state, &headers);
        if body["email"] == "ada@example.com" && body["password"] == "secret" {
            (
                [(header::SET_COOKIE, "session_id=tok-123; Path=/; HttpOnly")],
                Json(json!({"id": 1, "email": "ada@example.com"})),
            )
                .into_response()
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))).into_response()
        }
    }

    async fn register(Json(body): Json<Value>) -> AxumResponse {
        if body["username"].as_str().unwrap_or_default().is_empty() {
            (StatusCode::BAD_REQUEST, "Invalid request payload").into_response()
        } else {
            Json(json!({"id": 2})).into_response()
        }
    }

    async fn upload(State(state): State<Shared>, headers: HeaderMap, mut multipart: Multipart) -> AxumResponse {
        if !has_session(&headers) {
            return denied();
        }

        let mut file_name = String::new();
        let mut size = 0;
        let mut model = String::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    file_name = field.file_name().unwrap_or_default().to_string();
                    size = field.bytes().await.unwrap().len();
                }
                "model" => model = field.text().await.unwrap(),
                _ => {}
            }
        }

        let overview = format!("{} summarized by {}", file_name, model);
        state.lock().unwrap().upload = Some((file_name, model, size));
        Json(json!({ "overview": overview })).into_response()
    }

    async fn files(headers: HeaderMap) -> AxumResponse {
        if !has_session(&headers) {
            return denied();
        }
        Json(json!({"files": [
            {"name": "report.pdf", "uploaded_at": "2025-03-01T10:15:00Z"},
            "users/1/notes.txt"
        ]}))
        .into_response()
    }

    async fn overview(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> AxumResponse {
        if !has_session(&headers) {
            return denied();
        }
        let file = params.get("file").cloned().unwrap_or_default();
        Json(json!({"file": file, "summary": format!("Summary of {}", file)})).into_response()
    }

    async fn health() -> &'static str {
        "Server is running!"
    }

    async fn spawn_backend() -> (String, Shared) {
        let state: Shared = Arc::new(Mutex::new(Seen::default()));
        let app = Router::new()
            .route("/login", post(login))
            .route("/register", post(register))
            .route("/upload", post(upload))
            .route("/files", post(files))
            .route("/overview", get(overview))
            .route("/health", get(health))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), state)
    }

    fn client_for(base_url: &str) -> HttpClient {
        HttpClient::new(ClientConfig {
            base_url: base_url.to_string(),
            request_timeout_ms: 5_000,
            ..Default::default()
        })
        .unwrap()
    }

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest {
            email: "ada@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = client_for("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/files"), "http://localhost:8080/files");
    }

    #[test]
    fn test_restore_session_round_trip() {
        let client = client_for("http://localhost:8080");
        assert_eq!(client.session_token(), None);

        client.restore_session("abc");
        assert_eq!(client.session_token(), Some("abc".to_string()));
    }

    #[tokio::test]
    async fn test_login_sets_session_cookie() {
        let (base, state) = spawn_backend().await;
        let client = client_for(&base);

        client.login(&credentials("secret")).await.unwrap();

        assert_eq!(client.session_token(), Some(TOKEN.to_string()));
        let seen = state.lock().unwrap();
        let ids = &seen.request_ids;
        assert_eq!(ids.len(), 1);
        assert!(Uuid::parse_str(&ids[0]).is_ok());
    }

    #[tokio::test]
    async fn test_login_rejection_carries_server_message() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);

        let err = client.login(&credentials("wrong")).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(client.session_token(), None);
    }

    #[tokio::test]
    async fn test_register_plain_text_error_has_no_message() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);

        let request = RegisterRequest {
            username: String::new(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        let err = client.register(&request).await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test]
    async fn test_upload_sends_file_and_model() {
        let (base, state) = spawn_backend().await;
        let client = client_for(&base);
        client.login(&credentials("secret")).await.unwrap();

        let file = UploadFile::new("report.pdf", b"hello world".to_vec());
        let overview = client.upload(&file, Model::Claude3).await.unwrap();

        assert_eq!(overview.as_deref(), Some("report.pdf summarized by claude-3"));
        let seen = state.lock().unwrap();
        assert_eq!(
            seen.upload,
            Some(("report.pdf".to_string(), "claude-3".to_string(), 11))
        );
    }

    #[tokio::test]
    async fn test_upload_without_session_is_rejected() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);

        let file = UploadFile::new("report.pdf", b"x".to_vec());
        let err = client.upload(&file, Model::Gpt4).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.server_message(), Some("access denied"));
    }

    #[tokio::test]
    async fn test_list_files_accepts_both_shapes() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);
        client.login(&credentials("secret")).await.unwrap();

        let files = client.list_files().await.unwrap();

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["report.pdf", "notes.txt"]);
        assert!(files[0].uploaded_at.is_some());
    }

    #[tokio::test]
    async fn test_restored_session_is_sent() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);
        client.restore_session(TOKEN);

        let files = client.list_files().await.unwrap();
        assert_eq!(files.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_overview_encodes_file_name() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);
        client.restore_session(TOKEN);

        let summary = client.fetch_overview("q1 report&draft.pdf").await.unwrap();
        assert_eq!(summary, "Summary of q1 report&draft.pdf");
    }

    #[tokio::test]
    async fn test_health_accepts_plain_text() {
        let (base, _state) = spawn_backend().await;
        let client = client_for(&base);

        let health = client.health().await.unwrap();
        assert_eq!(health.message.as_deref(), Some("Server is running!"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client.list_files().await.unwrap_err();

        assert!(matches!(err, ApiError::Unavailable(_)));
        assert!(!err.is_rejection());
    }
}
