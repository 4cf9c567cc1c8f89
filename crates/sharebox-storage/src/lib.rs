//! # sharebox-storage
//!
//! Implements the [`UrlSigner`](sharebox_core::traits::UrlSigner) seam
//! against S3-compatible object storage (AWS S3, MinIO, R2).

pub mod signer;

pub use signer::s3::S3UrlSigner;
