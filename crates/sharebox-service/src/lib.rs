//! # sharebox-service
//!
//! Business logic for the share-link core: short code issuance, link
//! resolution, password verification, expiry evaluation, signed-URL
//! requests, and download accounting.

pub mod share;

pub use share::code::ShortCodeGenerator;
pub use share::counter::DownloadCounter;
pub use share::resolver::LinkResolver;
pub use share::service::ShareService;
