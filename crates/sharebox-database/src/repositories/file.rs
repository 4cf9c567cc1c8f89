//! PostgreSQL share link store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use sharebox_core::error::{AppError, ErrorKind};
use sharebox_core::result::AppResult;
use sharebox_entity::{CreateSharedFile, SharedFile};

use crate::store::FileStore;

/// Repository for shared file records backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn put(&self, data: &CreateSharedFile) -> AppResult<SharedFile> {
        sqlx::query_as::<_, SharedFile>(
            "INSERT INTO shared_files (owner_id, short_code, storage_key, name, mime_type, \
             size_bytes, is_password_protected, password_hash, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.short_code)
        .bind(&data.storage_key)
        .bind(&data.name)
        .bind(&data.mime_type)
        .bind(data.size_bytes)
        .bind(data.password_hash.is_some())
        .bind(&data.password_hash)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    async fn get_by_short_code(&self, code: &str) -> AppResult<Option<SharedFile>> {
        sqlx::query_as::<_, SharedFile>("SELECT * FROM shared_files WHERE short_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find file by short code", e)
            })
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<SharedFile>> {
        sqlx::query_as::<_, SharedFile>("SELECT * FROM shared_files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    // Single UPDATE statement so concurrent callers never lose an increment.
    async fn increment_download_count(&self, id: Uuid) -> AppResult<i64> {
        let row: Option<(i64,)> = sqlx::query_as(
            "UPDATE shared_files SET download_count = download_count + 1 \
             WHERE id = $1 RETURNING download_count",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to increment downloads", e)
        })?;

        row.map(|(count,)| count)
            .ok_or_else(|| AppError::not_found("File not found"))
    }
}
