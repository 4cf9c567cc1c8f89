//! Download accounting.

use std::sync::Arc;

use uuid::Uuid;

use sharebox_core::result::AppResult;
use sharebox_database::FileStore;

/// Increments a record's download tally.
///
/// Holds no state of its own. Exists as a named seam so the atomicity
/// contract — N concurrent increments advance the count by exactly N —
/// is explicit and independently testable.
#[derive(Debug, Clone)]
pub struct DownloadCounter {
    store: Arc<dyn FileStore>,
}

impl DownloadCounter {
    /// Creates a new counter over the given store.
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Record one issued download and return the new tally.
    pub async fn increment(&self, file_id: Uuid) -> AppResult<i64> {
        self.store.increment_download_count(file_id).await
    }
}
