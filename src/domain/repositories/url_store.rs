//! Storage capability for short code mappings.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a [`UrlStore`] backend.
///
/// "Not found" is not an error: lookups return `Ok(None)` for unknown or
/// expired codes, so callers can tell a missing mapping apart from a backend
/// that could not answer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached (refused, dropped, I/O failure).
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with an error.
    #[error("Storage operation failed: {0}")]
    Operation(String),

    /// The call did not finish before its deadline.
    #[error("Storage call timed out after {0:?}")]
    Timeout(Duration),

    /// The store has been closed.
    #[error("Storage connection is closed")]
    Closed,
}

impl StoreError {
    /// Returns true for failures that say nothing about the stored data.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout(_) | Self::Closed)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store mapping short codes to original URLs with a TTL.
///
/// The store is the single source of truth for mappings and the only
/// authority on whether a code is taken. Implementations must be safe for
/// concurrent use from many requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis `SET`/`GET` with `EX`
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map for tests and development
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Stores `original_url` under `short_code`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write did not happen.
    async fn store(&self, short_code: &str, original_url: &str, ttl: Duration) -> StoreResult<()>;

    /// Stores `original_url` under `short_code` only if no live mapping exists.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the mapping was written
    /// - `Ok(false)` if the code was already taken
    async fn store_if_absent(
        &self,
        short_code: &str,
        original_url: &str,
        ttl: Duration,
    ) -> StoreResult<bool>;

    /// Looks up the original URL for `short_code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if a live mapping exists
    /// - `Ok(None)` if the code was never stored or has expired
    async fn get(&self, short_code: &str) -> StoreResult<Option<String>>;

    /// Removes the mapping for `short_code`.
    ///
    /// Returns `Ok(true)` if a live mapping was removed.
    async fn delete(&self, short_code: &str) -> StoreResult<bool>;

    /// Releases backend resources. Later calls fail with [`StoreError::Closed`].
    async fn close(&self) -> StoreResult<()>;

    /// Checks that the backend answers.
    async fn ping(&self) -> bool;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
