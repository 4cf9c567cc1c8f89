//! Expiry classification.
//!
//! The single source of expiry truth. Both the resolve and download
//! paths call [`classify`] so the two can never disagree about what
//! "expired" means.

use chrono::{DateTime, Utc};

use sharebox_entity::LinkStatus;

/// Result of classifying a record against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    /// Whether the link is still downloadable.
    pub status: LinkStatus,
    /// Whole days until expiry (negative once it has passed).
    /// `None` for links that never expire.
    pub remaining_days: Option<i64>,
}

/// Classify a record as active or expired at `now`.
///
/// A missing `expires_at` means the link never expires. Expiry is
/// inclusive: a link whose timestamp equals `now` is already expired.
pub fn classify(now: DateTime<Utc>, expires_at: Option<DateTime<Utc>>) -> Expiry {
    match expires_at {
        None => Expiry {
            status: LinkStatus::Active,
            remaining_days: None,
        },
        Some(expires_at) => {
            let status = if expires_at <= now {
                LinkStatus::Expired
            } else {
                LinkStatus::Active
            };
            Expiry {
                status,
                remaining_days: Some((expires_at - now).num_days()),
            }
        }
    }
}
