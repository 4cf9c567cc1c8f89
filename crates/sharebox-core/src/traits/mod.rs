//! Seam traits implemented elsewhere in the workspace.

pub mod signer;

pub use signer::UrlSigner;
