//! Shared file entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file record reachable through a share link.
///
/// The record is created once by the upload collaborator and afterwards
/// only mutated by download accounting. `password_hash` and `storage_key`
/// never leave the server: both are skipped during serialization.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SharedFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// Owning account, absent for guest uploads.
    pub owner_id: Option<Uuid>,
    /// Unique, URL-safe short code identifying the share link.
    pub short_code: String,
    /// Opaque locator passed to the storage signer.
    #[serde(skip_serializing)]
    pub storage_key: String,
    /// Original file name (including extension).
    pub name: String,
    /// MIME type of the file.
    pub mime_type: String,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Whether downloads require a password.
    pub is_password_protected: bool,
    /// Argon2id hash, present iff the link is password-protected.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// When the link expires. Absent means it never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Number of signed URLs issued for this record.
    pub download_count: i64,
}

/// Data required to persist a new shared file record.
#[derive(Debug, Clone)]
pub struct CreateSharedFile {
    /// Owning account, if any.
    pub owner_id: Option<Uuid>,
    /// Short code, already checked for uniqueness.
    pub short_code: String,
    /// Storage locator for the uploaded bytes.
    pub storage_key: String,
    /// File name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Password hash (None = no password gate).
    pub password_hash: Option<String>,
    /// Expiry timestamp (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}
