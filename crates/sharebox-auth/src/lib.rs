//! # sharebox-auth
//!
//! Password hashing and verification for password-protected share links.

pub mod password;

pub use password::PasswordHasher;
