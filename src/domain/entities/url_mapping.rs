//! Stored mapping between a short code and an original URL.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// A live short code → URL mapping.
///
/// Created once per successful shortening and never mutated. The store drops
/// it when `expires_at` passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a mapping that starts now and lives for `ttl`.
    pub fn new(
        short_code: impl Into<String>,
        original_url: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self::starting_at(short_code, original_url, Utc::now(), ttl)
    }

    /// Creates a mapping with an explicit creation time.
    ///
    /// A `ttl` too large to represent saturates to the maximum timestamp.
    pub fn starting_at(
        short_code: impl Into<String>,
        original_url: impl Into<String>,
        created_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expires_at = TimeDelta::from_std(ttl)
            .ok()
            .and_then(|ttl| created_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            short_code: short_code.into(),
            original_url: original_url.into(),
            created_at,
            expires_at,
        }
    }

    /// Returns true once `now` has reached the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
