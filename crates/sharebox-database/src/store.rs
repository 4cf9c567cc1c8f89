//! Share link store trait.

use async_trait::async_trait;
use uuid::Uuid;

use sharebox_core::result::AppResult;
use sharebox_entity::{CreateSharedFile, SharedFile};

/// Persisted mapping from short code / file id to file metadata — the
/// single source of truth for share links.
///
/// Records are immutable after creation except for the download tally.
/// `increment_download_count` MUST be a single indivisible
/// read-modify-write so that N concurrent callers always advance the
/// count by exactly N.
#[async_trait]
pub trait FileStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new record and return it.
    ///
    /// Fails if the short code is already taken.
    async fn put(&self, data: &CreateSharedFile) -> AppResult<SharedFile>;

    /// Look up a record by its short code.
    async fn get_by_short_code(&self, code: &str) -> AppResult<Option<SharedFile>>;

    /// Look up a record by its file id.
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<SharedFile>>;

    /// Atomically increment the download tally and return the new count.
    async fn increment_download_count(&self, id: Uuid) -> AppResult<i64>;
}
