//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sharebox_core::config::AppConfig;
use sharebox_service::{LinkResolver, ShareService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Record registration service.
    pub share_service: Arc<ShareService>,
    /// Link resolution, password checks, and download grants.
    pub resolver: Arc<LinkResolver>,
}
