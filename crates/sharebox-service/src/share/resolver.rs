//! Share link resolution, password verification, and download grants.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use sharebox_auth::PasswordHasher;
use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_core::traits::UrlSigner;
use sharebox_database::FileStore;
use sharebox_entity::{LinkStatus, SharedFile, SharedFileView};

use super::counter::DownloadCounter;
use super::expiry;

/// A granted download: the signed URL the client should navigate to.
#[derive(Debug, Clone)]
pub struct DownloadGrant {
    /// Time-limited retrieval URL with attachment disposition.
    pub download_url: String,
}

/// Orchestrates share link access.
///
/// Every operation is stateless per request: password verification
/// leaves nothing behind, and the download path re-checks password and
/// expiry on every call rather than trusting an earlier verify.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    /// Share link store.
    store: Arc<dyn FileStore>,
    /// Password hasher for protected links.
    hasher: Arc<PasswordHasher>,
    /// Storage signer minting download URLs.
    signer: Arc<dyn UrlSigner>,
    /// Download tally.
    counter: DownloadCounter,
}

impl LinkResolver {
    /// Creates a new resolver.
    pub fn new(
        store: Arc<dyn FileStore>,
        hasher: Arc<PasswordHasher>,
        signer: Arc<dyn UrlSigner>,
        counter: DownloadCounter,
    ) -> Self {
        Self {
            store,
            hasher,
            signer,
            counter,
        }
    }

    /// Resolve a short code to the public metadata view.
    ///
    /// Expired links still resolve — the view carries an `expired`
    /// status and the download endpoint does the denying.
    pub async fn resolve(&self, code: &str) -> AppResult<SharedFileView> {
        let file = self.lookup_by_code(code).await?;
        let expiry = expiry::classify(Utc::now(), file.expires_at);
        Ok(SharedFileView::from_record(&file, expiry.status))
    }

    /// Check a submitted password against a share link.
    ///
    /// Unprotected links are trivially satisfied. No unlock state is
    /// recorded; the download call verifies again on its own.
    pub async fn verify_password(&self, code: &str, password: &str) -> AppResult<()> {
        let file = self.lookup_by_code(code).await?;
        self.check_password(&file, Some(password))
    }

    /// Grant a download for a file id, re-checking expiry and password.
    ///
    /// The signed URL is issued before the tally is touched: a download
    /// is never counted without a usable URL. The reverse failure — URL
    /// issued but the count update lost — is deliberately non-fatal and
    /// only logged, since the count is best-effort relative to issuance.
    pub async fn download(
        &self,
        file_id: Uuid,
        password: Option<&str>,
    ) -> AppResult<DownloadGrant> {
        let file = self
            .store
            .get_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        let expiry = expiry::classify(Utc::now(), file.expires_at);
        if expiry.status == LinkStatus::Expired {
            return Err(AppError::expired("This share link has expired"));
        }

        self.check_password(&file, password)?;

        let download_url = self.signer.issue(&file.storage_key, &file.name).await?;

        match self.counter.increment(file.id).await {
            Ok(count) => {
                info!(file_id = %file.id, download_count = count, "Download URL issued");
            }
            Err(e) => {
                warn!(file_id = %file.id, error = %e, "Download URL issued but count update failed");
            }
        }

        Ok(DownloadGrant { download_url })
    }

    async fn lookup_by_code(&self, code: &str) -> AppResult<SharedFile> {
        self.store
            .get_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("No file matches that share link"))
    }

    fn check_password(&self, file: &SharedFile, password: Option<&str>) -> AppResult<()> {
        if !file.is_password_protected {
            return Ok(());
        }

        let hash = file
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::internal("Protected record is missing its password hash"))?;

        let Some(password) = password else {
            return Err(AppError::unauthorized("This file requires a password"));
        };

        if self.hasher.verify(hash, password)? {
            Ok(())
        } else {
            Err(AppError::unauthorized("Incorrect password"))
        }
    }
}
