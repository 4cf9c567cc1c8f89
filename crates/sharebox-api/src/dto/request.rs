//! Request DTOs with validation.
//!
//! The web client sends loosely-typed camelCase bodies; these schemas
//! pin down required/optional fields before anything reaches the
//! domain layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Password verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPasswordRequest {
    /// Short code of the link being unlocked.
    #[validate(length(min = 1, message = "shortCode is required"))]
    pub short_code: String,
    /// Submitted password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Download request body. The whole body is optional for links without
/// a password gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    /// Password, required only for protected links.
    pub password: Option<String>,
}

/// Record registration request, sent by the upload collaborator once the
/// file bytes are persisted.
///
/// Mirrors the upload form contract: `hasExpiry` gates `expiresAt`
/// (hours from now) and `isPassword` gates `password`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFileRequest {
    /// Owning account, absent for guest uploads.
    pub owner_id: Option<Uuid>,
    /// Locator of the persisted bytes.
    #[validate(length(min = 1, message = "storageKey is required"))]
    pub storage_key: String,
    /// File name.
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    /// MIME type.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub mime_type: String,
    /// Size in bytes.
    #[validate(range(min = 0, message = "size must not be negative"))]
    pub size: i64,
    /// Whether the link should expire.
    #[serde(default)]
    pub has_expiry: bool,
    /// Hours from now until expiry, required when `hasExpiry` is set.
    pub expires_at: Option<i64>,
    /// Whether the link is password-protected.
    #[serde(default)]
    pub is_password: bool,
    /// Password, required when `isPassword` is set.
    pub password: Option<String>,
}
