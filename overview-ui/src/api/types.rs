//! Request and response types shared by the pages.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Model used to generate an overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Gpt4,
    Gpt35,
    Claude3,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Gpt4, Model::Gpt35, Model::Claude3];

    /// Identifier sent to the backend
    pub fn id(self) -> &'static str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gpt35 => "gpt-3.5",
            Model::Claude3 => "claude-3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Model::Gpt4 => "GPT-4",
            Model::Gpt35 => "GPT-3.5",
            Model::Claude3 => "Claude 3",
        }
    }

    /// Parse a `<select>` value; unknown values keep the default
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .unwrap_or_default()
    }
}

/// Error body returned with non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub overview: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OverviewResponse {
    #[serde(alias = "overview")]
    pub summary: String,
}

/// An uploaded file in the history sidebar
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub name: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl FileEntry {
    /// Entry for a bare storage key such as `users/7/report.pdf`
    pub fn from_key(key: &str) -> Self {
        Self {
            name: key.rsplit('/').next().unwrap_or(key).to_string(),
            uploaded_at: None,
        }
    }

    /// Upload time as shown in the sidebar
    pub fn uploaded_label(&self) -> Option<String> {
        self.uploaded_at
            .map(|dt| dt.format("%b %d, %H:%M").to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFileEntry {
    Key(String),
    Record {
        name: String,
        #[serde(default)]
        uploaded_at: Option<RawTimestamp>,
    },
}

/// Timestamps arrive as RFC 3339 text or epoch milliseconds
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
    Other(IgnoredAny),
}

impl RawTimestamp {
    fn parse(&self) -> Option<DateTime<Utc>> {
        match self {
            RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| s.parse().ok().and_then(DateTime::from_timestamp_millis)),
            RawTimestamp::Other(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for FileEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFileEntry::deserialize(deserializer)? {
            RawFileEntry::Key(key) => FileEntry::from_key(&key),
            RawFileEntry::Record { name, uploaded_at } => FileEntry {
                name,
                uploaded_at: uploaded_at.as_ref().and_then(RawTimestamp::parse),
            },
        })
    }
}
