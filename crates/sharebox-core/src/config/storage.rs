//! Storage signer configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// How long a signed download URL stays valid, in seconds.
    ///
    /// Independent of any share link's own expiry timestamp.
    #[serde(default = "default_signed_url_ttl")]
    pub signed_url_ttl_seconds: u64,
    /// S3-compatible object storage configuration.
    pub s3: S3StorageConfig,
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO or R2).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Force path-style addressing (required by MinIO).
    #[serde(default)]
    pub force_path_style: bool,
}

fn default_signed_url_ttl() -> u64 {
    300
}

fn default_region() -> String {
    "us-east-1".to_string()
}
