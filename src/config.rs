//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::{ClientConfig, Model};
use crate::screens::OpenMode;
use crate::session::SessionStore;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// HTTP client settings for this backend
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
            ..Default::default()
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session file path (default: platform data dir)
    pub file: Option<String>,

    #[serde(default = "default_persist")]
    pub persist: bool,
}

fn default_persist() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: None,
            persist: default_persist(),
        }
    }
}

impl SessionConfig {
    pub fn store(&self) -> SessionStore {
        match &self.file {
            Some(path) => SessionStore::new(path),
            None => SessionStore::default(),
        }
    }
}

/// Dashboard behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Fetch stored overviews when opening a history entry
    #[serde(default = "default_fetch_overviews")]
    pub fetch_overviews: bool,
}

fn default_model() -> String {
    Model::default().as_str().to_string()
}

fn default_fetch_overviews() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            fetch_overviews: default_fetch_overviews(),
        }
    }
}

impl DashboardConfig {
    /// Configured model, or the default when the value is unknown
    pub fn model(&self) -> Model {
        self.default_model.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; using {}", e, Model::default());
            Model::default()
        })
    }

    pub fn open_mode(&self) -> OpenMode {
        if self.fetch_overviews {
            OpenMode::Fetch
        } else {
            OpenMode::Preview
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("file-overview").join("config.toml")),
            Some(PathBuf::from("/etc/file-overview/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(url) = std::env::var("OVERVIEW_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("OVERVIEW_REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        // Session overrides
        if let Ok(file) = std::env::var("OVERVIEW_SESSION_FILE") {
            self.session.file = Some(file);
        }

        // Dashboard overrides
        if let Ok(model) = std::env::var("OVERVIEW_DEFAULT_MODEL") {
            self.dashboard.default_model = model;
        }
        if let Ok(fetch) = std::env::var("OVERVIEW_FETCH_OVERVIEWS") {
            self.dashboard.fetch_overviews = fetch.to_lowercase() != "false" && fetch != "0";
        }

        // Logging overrides
        if let Ok(level) = std::env::var("OVERVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("OVERVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# File Overview Configuration
#
# Environment variables override these settings:
# - OVERVIEW_API_URL
# - OVERVIEW_REQUEST_TIMEOUT_SECS
# - OVERVIEW_SESSION_FILE
# - OVERVIEW_DEFAULT_MODEL
# - OVERVIEW_FETCH_OVERVIEWS
# - OVERVIEW_LOG_LEVEL
# - OVERVIEW_LOG_FORMAT

[api]
# Backend origin
base_url = "http://localhost:8080"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# Keep the login session between commands
persist = true

# Session file (default: platform data directory)
# file = "~/.local/share/file-overview/session.json"

[dashboard]
# Model used for uploads: gpt-4, gpt-3.5, claude-3
default_model = "gpt-4"

# Fetch the stored overview when opening a history entry
# (false shows a local preview instead)
fetch_overviews = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/file-overview/client.log"
"#
    .to_string()
}
