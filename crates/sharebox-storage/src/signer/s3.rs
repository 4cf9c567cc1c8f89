//! S3-compatible signed URL issuer.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::{Client, Config};

use sharebox_core::config::storage::StorageConfig;
use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_core::traits::UrlSigner;

/// Issues presigned GET URLs against an S3-compatible bucket.
///
/// The URL carries an attachment content-disposition so the retrieving
/// agent saves the file instead of rendering it inline, and stays valid
/// for the configured window only. The bucket enforces that window on
/// its own; a server restart does not invalidate outstanding URLs.
#[derive(Debug, Clone)]
pub struct S3UrlSigner {
    client: Client,
    bucket: String,
    url_ttl: Duration,
}

impl S3UrlSigner {
    /// Create a new signer from storage configuration.
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        let s3 = &config.s3;
        if s3.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket is not set"));
        }

        let credentials = Credentials::new(
            &s3.access_key,
            &s3.secret_key,
            None,
            None,
            "sharebox-config",
        );

        let mut builder = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(s3.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(s3.force_path_style);

        if !s3.endpoint.is_empty() {
            builder = builder.endpoint_url(&s3.endpoint);
        }

        tracing::info!(
            bucket = %s3.bucket,
            region = %s3.region,
            ttl_seconds = config.signed_url_ttl_seconds,
            "Initializing S3 URL signer"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: s3.bucket.clone(),
            url_ttl: Duration::from_secs(config.signed_url_ttl_seconds),
        })
    }
}

#[async_trait]
impl UrlSigner for S3UrlSigner {
    fn signer_type(&self) -> &str {
        "s3"
    }

    async fn issue(&self, storage_key: &str, filename: &str) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(self.url_ttl).map_err(|e| {
            AppError::with_source(
                sharebox_core::error::ErrorKind::Storage,
                "Invalid presigning window",
                e,
            )
        })?;

        let disposition = format!("attachment; filename=\"{}\"", sanitize_filename(filename));

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(storage_key)
            .response_content_disposition(disposition)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    sharebox_core::error::ErrorKind::Storage,
                    "Failed to sign download URL",
                    e,
                )
            })?;

        Ok(presigned.uri().to_string())
    }
}

/// Strip characters that would break the quoted disposition header.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect()
}
