//! Data Transfer Objects
//!
//! Request and response types for the File Overview backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================
// Requests
// ============================================

/// Request body for `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its file name
    pub async fn read(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { name, bytes })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// ============================================
// Model
// ============================================

/// Model used by the backend to generate the overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5")]
    Gpt35,
    #[serde(rename = "claude-3")]
    Claude3,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Gpt4, Model::Gpt35, Model::Claude3];

    /// Identifier sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gpt35 => "gpt-3.5",
            Model::Claude3 => "claude-3",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Model::Gpt4 => "GPT-4",
            Model::Gpt35 => "GPT-3.5",
            Model::Claude3 => "Claude 3",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown model: {} (expected one of: gpt-4, gpt-3.5, claude-3)",
                    s
                )
            })
    }
}

// ============================================
// Responses
// ============================================

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `POST /upload`
#[derive(Debug, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Response body for `POST /files`
#[derive(Debug, Default, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// Response body for `GET /overview`
#[derive(Debug, Deserialize)]
pub struct OverviewResponse {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(alias = "overview")]
    pub summary: String,
}

/// Response body for `GET /health`
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of the upload history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, uploaded_at: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            uploaded_at,
        }
    }

    /// Build an entry from a bare storage key such as `users/7/report.pdf`
    pub fn from_key(key: &str) -> Self {
        let name = key.rsplit('/').next().unwrap_or(key);
        Self {
            name: name.to_string(),
            uploaded_at: None,
        }
    }

    /// Upload time formatted for display
    pub fn uploaded_label(&self) -> String {
        self.uploaded_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFileEntry {
    Key(String),
    Record {
        name: String,
        #[serde(default)]
        uploaded_at: Option<serde_json::Value>,
    },
}

impl<'de> Deserialize<'de> for FileEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFileEntry::deserialize(deserializer)? {
            RawFileEntry::Key(key) => FileEntry::from_key(&key),
            RawFileEntry::Record { name, uploaded_at } => FileEntry {
                name,
                uploaded_at: uploaded_at.as_ref().and_then(timestamp_from_value),
            },
        })
    }
}

/// Upload timestamp from a string or epoch-millis number; anything else is unknown
fn timestamp_from_value(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(s) => parse_timestamp(s),
        serde_json::Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

/// Parse an upload timestamp; unparseable values are treated as unknown
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    s.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_identifiers() {
        assert_eq!(Model::default(), Model::Gpt4);
        assert_eq!(Model::Gpt35.as_str(), "gpt-3.5");
        assert_eq!(Model::Claude3.label(), "Claude 3");
        assert_eq!("claude-3".parse::<Model>().unwrap(), Model::Claude3);
        assert_eq!(" GPT-4 ".parse::<Model>().unwrap(), Model::Gpt4);
        assert!("llama".parse::<Model>().is_err());
    }

    #[test]
    fn test_model_serializes_as_identifier() {
        let json = serde_json::to_string(&Model::Gpt35).unwrap();
        assert_eq!(json, r#""gpt-3.5""#);
    }

    #[test]
    fn test_file_list_with_records() {
        let json = r#"{"files": [
            {"name": "report.pdf", "uploaded_at": "2025-03-01T10:15:00Z"},
            {"name": "notes.txt"}
        ]}"#;
        let list: FileListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(list.files.len(), 2);
        assert_eq!(list.files[0].name, "report.pdf");
        assert_eq!(list.files[0].uploaded_label(), "2025-03-01 10:15:00");
        assert_eq!(list.files[1].uploaded_at, None);
        assert_eq!(list.files[1].uploaded_label(), "-");
    }

    #[test]
    fn test_file_list_with_bare_keys() {
        let json = r#"{"files": ["users/7/report.pdf"]}"#;
        let list: FileListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(list.files, vec![FileEntry::new("report.pdf", None)]);
    }

    #[test]
    fn test_file_list_missing_field_defaults_empty() {
        let list: FileListResponse = serde_json::from_str("{}").unwrap();
        assert!(list.files.is_empty());
    }

    #[test]
    fn test_unparseable_timestamp_is_unknown() {
        let json = r#"{"name": "a.txt", "uploaded_at": "yesterday-ish"}"#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.uploaded_at, None);
    }

    #[test]
    fn test_numeric_timestamp_next_to_string() {
        let json = r#"{"files": [
            {"name": "report.pdf", "uploaded_at": 1740824100000},
            {"name": "notes.txt", "uploaded_at": "2025-03-01T10:15:00Z"},
            {"name": "odd.bin", "uploaded_at": true}
        ]}"#;
        let list: FileListResponse = serde_json::from_str(json).unwrap();

        assert_eq!(list.files.len(), 3);
        assert_eq!(list.files[0].uploaded_label(), "2025-03-01 10:15:00");
        assert_eq!(list.files[0].uploaded_at, list.files[1].uploaded_at);
        assert_eq!(list.files[2].uploaded_at, None);
    }

    #[test]
    fn test_overview_response_accepts_alias() {
        let a: OverviewResponse =
            serde_json::from_str(r#"{"file": "k", "summary": "Two sentences."}"#).unwrap();
        let b: OverviewResponse = serde_json::from_str(r#"{"overview": "Two sentences."}"#).unwrap();
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_register_request_shape() {
        let req = RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["username"], "ada");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "pw");
    }
}
