//! Signed URL issuers.

pub mod s3;
