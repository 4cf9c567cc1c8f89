//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse for AppError` impl lives in `sharebox-core` alongside
//! the `AppError` type (Rust's orphan rule forbids implementing a foreign
//! trait for a foreign type here). The response-body DTO is re-exported for
//! convenience.

pub use sharebox_core::error::ApiErrorResponse;
