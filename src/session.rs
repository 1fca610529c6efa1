//! Session Store
//!
//! Keeps the backend `session_id` cookie between command invocations. The
//! backend issues sessions valid for 24 hours; a stored session is ignored once
//! that window has passed or when it belongs to another backend origin.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lifetime of a backend session
pub const SESSION_TTL_HOURS: i64 = 24;

/// A persisted session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub base_url: String,
    pub cookie: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(base_url: impl Into<String>, cookie: impl Into<String>) -> Self {
        let created_at = Utc::now();
        Self {
            base_url: base_url.into(),
            cookie: cookie.into(),
            created_at,
            expires_at: created_at + Duration::hours(SESSION_TTL_HOURS),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// File-backed session storage
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data directory
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .map(|p| p.join("file-overview").join("session.json"))
            .unwrap_or_else(|| PathBuf::from("./.file-overview-session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session for `base_url`, if one is stored and still valid
    pub fn load(&self, base_url: &str) -> Result<Option<StoredSession>, SessionError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Io(e)),
        };

        let session: StoredSession = serde_json::from_str(&content)?;

        if session.base_url.trim_end_matches('/') != base_url.trim_end_matches('/') {
            tracing::debug!(
                "Stored session belongs to {}, not {}",
                session.base_url,
                base_url
            );
            return Ok(None);
        }
        if session.is_expired() {
            tracing::info!("Stored session expired at {}", session.expires_at);
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Persist a session, creating parent directories as needed
    pub fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(session)?;

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // Owner-only: the file holds a live credential
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(content.as_bytes())?;

        tracing::debug!("Session saved to {:?}", self.path);
        Ok(())
    }

    /// Remove the stored session; a missing file is not an error
    pub fn clear(&self) -> Result<bool, SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SessionError::Io(e)),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt session file: {0}")]
    Format(#[from] serde_json::Error),
}
