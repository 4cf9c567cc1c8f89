//! In-memory share link store.
//!
//! Backs tests and local single-process runs. The dashmap shard lock
//! makes the download counter increment indivisible, matching the
//! atomicity contract of the Postgres repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_entity::{CreateSharedFile, SharedFile};

use crate::store::FileStore;

/// Share link store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    /// Records keyed by file id.
    files: DashMap<Uuid, SharedFile>,
    /// Short code index.
    by_code: DashMap<String, Uuid>,
}

impl MemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn put(&self, data: &CreateSharedFile) -> AppResult<SharedFile> {
        let id = Uuid::new_v4();

        // Claiming the code through the entry API keeps the uniqueness
        // check and the insert under one shard lock.
        match self.by_code.entry(data.short_code.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::database(format!(
                    "Short code '{}' is already taken",
                    data.short_code
                )));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(id);
            }
        }

        let file = SharedFile {
            id,
            owner_id: data.owner_id,
            short_code: data.short_code.clone(),
            storage_key: data.storage_key.clone(),
            name: data.name.clone(),
            mime_type: data.mime_type.clone(),
            size_bytes: data.size_bytes,
            is_password_protected: data.password_hash.is_some(),
            password_hash: data.password_hash.clone(),
            expires_at: data.expires_at,
            created_at: Utc::now(),
            download_count: 0,
        };

        self.files.insert(id, file.clone());
        Ok(file)
    }

    async fn get_by_short_code(&self, code: &str) -> AppResult<Option<SharedFile>> {
        let Some(id) = self.by_code.get(code).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        Ok(self.files.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<SharedFile>> {
        Ok(self.files.get(&id).map(|entry| entry.value().clone()))
    }

    async fn increment_download_count(&self, id: Uuid) -> AppResult<i64> {
        let mut entry = self
            .files
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("File not found"))?;
        entry.download_count += 1;
        Ok(entry.download_count)
    }
}
