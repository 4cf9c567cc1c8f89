//! Signed-URL issuance trait for pluggable storage backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for storage collaborators that mint time-limited retrieval URLs.
///
/// The signer holds no per-request state. The URL it returns carries its
/// own short validity window, enforced by the storage backend and
/// independent of any share link's expiry timestamp. The URL must
/// instruct the retrieving agent to save the response as an attachment
/// rather than render it inline.
///
/// The [`UrlSigner`] trait is defined here in `sharebox-core` and
/// implemented in `sharebox-storage`.
#[async_trait]
pub trait UrlSigner: Send + Sync + std::fmt::Debug + 'static {
    /// Return the signer type name (e.g., "s3").
    fn signer_type(&self) -> &str;

    /// Mint a signed download URL for the object at `storage_key`.
    ///
    /// `filename` is the name the retrieving agent should save the
    /// response under (attachment content-disposition).
    async fn issue(&self, storage_key: &str, filename: &str) -> AppResult<String>;
}
