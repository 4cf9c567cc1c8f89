//! Public projection of a shared file record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::SharedFile;

/// Derived link state. Never stored; computed from `expires_at` at
/// request time. `Expired` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    /// The link can still be downloaded.
    Active,
    /// The expiry timestamp has passed; metadata stays resolvable but
    /// downloads are denied.
    Expired,
}

/// The metadata a link visitor is allowed to see.
///
/// Field names follow the wire contract consumed by the web client
/// (camelCase, `type`/`size` instead of `mime_type`/`size_bytes`).
/// `password_hash` and `storage_key` have no counterpart here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedFileView {
    /// File identifier used by the download endpoint.
    pub file_id: Uuid,
    /// File name.
    pub name: String,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes.
    pub size: i64,
    /// Whether a password is required to download.
    pub is_password_protected: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Expiry timestamp, if any.
    pub expires_at: Option<DateTime<Utc>>,
    /// Derived link state.
    pub status: LinkStatus,
}

impl SharedFileView {
    /// Project a record into its public view with a pre-computed status.
    pub fn from_record(file: &SharedFile, status: LinkStatus) -> Self {
        Self {
            file_id: file.id,
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size_bytes,
            is_password_protected: file.is_password_protected,
            created_at: file.created_at,
            expires_at: file.expires_at,
            status,
        }
    }
}
