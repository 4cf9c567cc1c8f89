//! Shared test helpers for integration tests.
//!
//! The app under test runs against the in-memory store and a
//! deterministic signer, so no database or object storage is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use sharebox_api::state::AppState;
use sharebox_auth::PasswordHasher;
use sharebox_core::config::server::{CorsConfig, ServerConfig};
use sharebox_core::config::storage::StorageConfig;
use sharebox_core::config::{AppConfig, DatabaseConfig};
use sharebox_core::result::AppResult;
use sharebox_core::traits::UrlSigner;
use sharebox_database::FileStore;
use sharebox_database::repositories::MemoryFileStore;
use sharebox_entity::{CreateSharedFile, SharedFile};
use sharebox_service::{DownloadCounter, LinkResolver, ShareService, ShortCodeGenerator};

/// Signer returning a deterministic URL, never touching a network.
#[derive(Debug)]
struct StaticSigner;

#[async_trait]
impl UrlSigner for StaticSigner {
    fn signer_type(&self) -> &str {
        "static"
    }

    async fn issue(&self, storage_key: &str, _filename: &str) -> AppResult<String> {
        Ok(format!("https://signed.test/{storage_key}"))
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store for direct seeding and assertions
    pub store: Arc<MemoryFileStore>,
    /// Hasher matching the one the app verifies against
    pub hasher: PasswordHasher,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = test_config();

        let store = Arc::new(MemoryFileStore::new());
        let store_dyn: Arc<dyn FileStore> = store.clone();
        let signer: Arc<dyn UrlSigner> = Arc::new(StaticSigner);
        let password_hasher = Arc::new(PasswordHasher::new());

        let share_service = Arc::new(ShareService::new(
            store_dyn.clone(),
            ShortCodeGenerator::new(store_dyn.clone()),
            Arc::clone(&password_hasher),
        ));
        let resolver = Arc::new(LinkResolver::new(
            store_dyn.clone(),
            Arc::clone(&password_hasher),
            signer,
            DownloadCounter::new(store_dyn),
        ));

        let app_state = AppState {
            config: Arc::new(config),
            share_service,
            resolver,
        };

        let router = sharebox_api::build_router(app_state);

        Self {
            router,
            store,
            hasher: PasswordHasher::new(),
        }
    }

    /// Seed a record directly into the store and return it
    pub async fn seed_file(
        &self,
        code: &str,
        password: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) -> SharedFile {
        let password_hash = password.map(|p| self.hasher.hash(p).expect("hash password"));
        self.store
            .put(&CreateSharedFile {
                owner_id: None,
                short_code: code.to_string(),
                storage_key: format!("uploads/{code}"),
                name: format!("{code}.pdf"),
                mime_type: "application/pdf".to_string(),
                size_bytes: 2048,
                password_hash,
                expires_at,
            })
            .await
            .expect("seed file")
    }

    /// Current download count of a seeded record
    pub async fn download_count(&self, id: Uuid) -> i64 {
        self.store
            .get_by_id(id)
            .await
            .expect("lookup")
            .expect("record present")
            .download_count
    }

    /// Make an HTTP request to the test app.
    ///
    /// Requests without a body carry no content type, matching how the
    /// web client posts bodyless downloads.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);

        let req = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&body).expect("serialize body"),
                )),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            url: "postgres://unused-in-tests".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        storage: StorageConfig {
            signed_url_ttl_seconds: 300,
            s3: Default::default(),
        },
        logging: Default::default(),
    }
}
