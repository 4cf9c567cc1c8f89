//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sharebox_entity::SharedFile;

/// Download grant response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    /// Signed, time-limited retrieval URL.
    pub download_url: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Response to a successful record registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredFileResponse {
    /// File identifier.
    pub file_id: Uuid,
    /// Short code for the share link.
    pub short_code: String,
    /// Whether downloads require a password.
    pub is_password_protected: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Expiry timestamp, if any.
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<SharedFile> for RegisteredFileResponse {
    fn from(file: SharedFile) -> Self {
        Self {
            file_id: file.id,
            short_code: file.short_code,
            is_password_protected: file.is_password_protected,
            created_at: file.created_at,
            expires_at: file.expires_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
