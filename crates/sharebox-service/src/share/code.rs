//! Short code generation for share links.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;

use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_database::FileStore;

/// Raw entropy per code. 6 bytes encode to 8 URL-safe characters and
/// give a ~2^48 code space, so collisions stay theoretical.
const CODE_BYTES: usize = 6;

/// Collision retries before giving up.
const MAX_ATTEMPTS: u32 = 5;

/// Produces collision-free, URL-safe short codes.
#[derive(Debug, Clone)]
pub struct ShortCodeGenerator {
    /// Store checked for collisions.
    store: Arc<dyn FileStore>,
}

impl ShortCodeGenerator {
    /// Creates a new generator backed by the given store.
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Generates a short code not yet present in the store.
    ///
    /// Retries on collision up to a small bound; exhausting the bound is
    /// practically unreachable and reported as an internal error so the
    /// contract stays total.
    pub async fn generate(&self) -> AppResult<String> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = random_code();
            if self.store.get_by_short_code(&code).await?.is_none() {
                return Ok(code);
            }
            tracing::warn!(attempt, "Short code collision, retrying");
        }

        Err(AppError::internal(
            "Could not generate a unique short code",
        ))
    }
}

/// One candidate code from OS randomness.
fn random_code() -> String {
    let mut bytes = [0u8; CODE_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
