//! # sharebox-api
//!
//! HTTP API layer for ShareBox built on Axum.
//!
//! Provides the share-link endpoints, request/response DTOs, error
//! mapping, CORS, and request logging middleware.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
