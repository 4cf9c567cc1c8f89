//! ShareBox Server — share-link resolution and signed downloads.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sharebox_api::state::AppState;
use sharebox_auth::PasswordHasher;
use sharebox_core::config::AppConfig;
use sharebox_core::error::AppError;
use sharebox_core::traits::UrlSigner;
use sharebox_database::FileStore;
use sharebox_database::connection::DatabasePool;
use sharebox_database::repositories::FileRepository;
use sharebox_service::{DownloadCounter, LinkResolver, ShareService, ShortCodeGenerator};
use sharebox_storage::S3UrlSigner;

#[tokio::main]
async fn main() {
    let env = std::env::var("SHAREBOX_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShareBox v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = DatabasePool::connect(&config.database).await?.into_pool();
    sharebox_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Store and storage signer ─────────────────────────
    let store: Arc<dyn FileStore> = Arc::new(FileRepository::new(db_pool.clone()));
    let signer: Arc<dyn UrlSigner> = Arc::new(S3UrlSigner::new(&config.storage)?);
    tracing::info!(signer = signer.signer_type(), "Storage signer initialized");

    // ── Step 3: Services ─────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let generator = ShortCodeGenerator::new(Arc::clone(&store));
    let share_service = Arc::new(ShareService::new(
        Arc::clone(&store),
        generator,
        Arc::clone(&password_hasher),
    ));
    let resolver = Arc::new(LinkResolver::new(
        Arc::clone(&store),
        Arc::clone(&password_hasher),
        Arc::clone(&signer),
        DownloadCounter::new(Arc::clone(&store)),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        share_service,
        resolver,
    };

    let app = sharebox_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ShareBox server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("ShareBox server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
