//! # File Overview
//!
//! Client for the File Overview System: register, log in, upload a file with a
//! model choice, and read the AI-generated overview the backend produces.
//!
//! ## Modules
//!
//! - [`api`]: Typed HTTP client for the backend and the [`OverviewApi`] seam
//! - [`screens`]: Form, loading and result state for each screen
//! - [`session`]: Persisted backend session cookie
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use file_overview::api::{ClientConfig, HttpClient};
//! use file_overview::screens::{DashboardScreen, LoginScreen};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(ClientConfig::default())?;
//!
//!     let mut login = LoginScreen::new("ada@example.com", "hunter2");
//!     if login.submit(&client).await.is_none() {
//!         eprintln!("{}", login.error().unwrap_or_default());
//!         return Ok(());
//!     }
//!
//!     let mut dashboard = DashboardScreen::default();
//!     dashboard.mount(&client).await;
//!     println!("{} files uploaded", dashboard.files().len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod screens;
pub mod session;

pub use api::{
    ApiError, ApiResult, ClientConfig, FileEntry, HttpClient, Model, OverviewApi, UploadFile,
};

pub use screens::{
    DashboardScreen, HistoryView, HomeScreen, LoginScreen, Navigation, RegisterScreen, Route,
};

pub use session::{SessionError, SessionStore, StoredSession};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig, SessionConfig};
