//! Share link registration.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use sharebox_auth::PasswordHasher;
use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_database::FileStore;
use sharebox_entity::{CreateSharedFile, SharedFile};

use super::code::ShortCodeGenerator;

/// What the upload collaborator hands over once the bytes are persisted.
///
/// The expiry arrives as hours from now, matching the upload form.
/// Byte handling and size/type validation happen before this point.
#[derive(Debug, Clone)]
pub struct RegisterFileRequest {
    /// Owning account, absent for guest uploads.
    pub owner_id: Option<Uuid>,
    /// Locator of the already-persisted bytes.
    pub storage_key: String,
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Optional password gate.
    pub password: Option<String>,
    /// Optional expiry window in hours from now.
    pub expires_in_hours: Option<i64>,
}

/// Creates share link records on behalf of the upload collaborator.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Share link store.
    store: Arc<dyn FileStore>,
    /// Short code source.
    generator: ShortCodeGenerator,
    /// Password hasher for protected links.
    hasher: Arc<PasswordHasher>,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        store: Arc<dyn FileStore>,
        generator: ShortCodeGenerator,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            store,
            generator,
            hasher,
        }
    }

    /// Register a freshly uploaded file and mint its share link.
    pub async fn register(&self, req: RegisterFileRequest) -> AppResult<SharedFile> {
        if req.name.is_empty() {
            return Err(AppError::validation("File name must not be empty"));
        }
        if req.size_bytes < 0 {
            return Err(AppError::validation("File size must not be negative"));
        }
        if let Some(ref password) = req.password {
            if password.is_empty() {
                return Err(AppError::validation("Password must not be empty"));
            }
        }

        let expires_at = match req.expires_in_hours {
            Some(hours) if hours <= 0 => {
                return Err(AppError::validation(
                    "Expiry must be at least one hour in the future",
                ));
            }
            Some(hours) => Some(Utc::now() + Duration::hours(hours)),
            None => None,
        };

        let password_hash = match req.password {
            Some(ref password) => Some(self.hasher.hash(password)?),
            None => None,
        };

        let short_code = self.generator.generate().await?;

        let file = self
            .store
            .put(&CreateSharedFile {
                owner_id: req.owner_id,
                short_code,
                storage_key: req.storage_key,
                name: req.name,
                mime_type: req.mime_type,
                size_bytes: req.size_bytes,
                password_hash,
                expires_at,
            })
            .await?;

        info!(
            file_id = %file.id,
            short_code = %file.short_code,
            protected = file.is_password_protected,
            "Share link registered"
        );

        Ok(file)
    }
}
