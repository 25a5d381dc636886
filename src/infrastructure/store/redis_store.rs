//! Redis-backed store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, aio::ConnectionManager};
use tracing::{debug, error, info};

use crate::domain::repositories::{StoreError, StoreResult, UrlStore};

/// Redis implementation of [`UrlStore`].
///
/// One key per short code (optionally namespaced by a prefix), the raw
/// original URL as value, and the TTL set with `EX` at write time. Reads
/// never renew the TTL.
///
/// Uses `ConnectionManager`, which multiplexes a single connection and
/// reconnects on failure; clones are cheap and share the connection.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
    closed: AtomicBool,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `key_prefix` - Prepended to every short code key (may be empty)
    /// - `connect_timeout` - Deadline for connecting and the initial PING
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established in time, or the PING fails.
    pub async fn connect(
        redis_url: &str,
        key_prefix: impl Into<String>,
        connect_timeout: Duration,
    ) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(connect_timeout))?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        tokio::time::timeout(connect_timeout, test_conn.ping::<()>())
            .await
            .map_err(|_| StoreError::Timeout(connect_timeout))?
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
            closed: AtomicBool::new(false),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }

    /// Returns a connection handle, or [`StoreError::Closed`] after `close`.
    fn connection(&self) -> StoreResult<ConnectionManager> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(self.client.clone())
    }
}

/// TTL in whole seconds; Redis rejects `EX 0`.
fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

/// Separates connectivity failures from errors reported by the server.
fn map_redis_error(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_timeout() {
        StoreError::Unavailable(e.to_string())
    } else {
        StoreError::Operation(e.to_string())
    }
}

#[async_trait]
impl UrlStore for RedisStore {
    async fn store(&self, short_code: &str, original_url: &str, ttl: Duration) -> StoreResult<()> {
        let key = self.build_key(short_code);
        let mut conn = self.connection()?;
        let seconds = ttl_seconds(ttl);

        conn.set_ex::<_, _, ()>(&key, original_url, seconds)
            .await
            .map_err(|e| {
                error!("Redis SET error for {}: {}", short_code, e);
                map_redis_error(e)
            })?;

        debug!("Redis SET: {} (TTL: {}s)", short_code, seconds);
        Ok(())
    }

    async fn store_if_absent(
        &self,
        short_code: &str,
        original_url: &str,
        ttl: Duration,
    ) -> StoreResult<bool> {
        let key = self.build_key(short_code);
        let mut conn = self.connection()?;

        let reply: Option<String> = redis::cmd("SET")
            .arg(&key)
            .arg(original_url)
            .arg("NX")
            .arg("EX")
            .arg(ttl_seconds(ttl))
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("Redis SET NX error for {}: {}", short_code, e);
                map_redis_error(e)
            })?;

        let written = reply.is_some();
        debug!("Redis SET NX: {} (written: {})", short_code, written);
        Ok(written)
    }

    async fn get(&self, short_code: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(short_code);
        let mut conn = self.connection()?;

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Redis HIT: {}", short_code);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Redis MISS: {}", short_code);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", short_code, e);
                Err(map_redis_error(e))
            }
        }
    }

    async fn delete(&self, short_code: &str) -> StoreResult<bool> {
        let key = self.build_key(short_code);
        let mut conn = self.connection()?;

        let deleted = conn.del::<_, i32>(&key).await.map_err(|e| {
            error!("Redis DEL error for {}: {}", short_code, e);
            map_redis_error(e)
        })?;

        Ok(deleted > 0)
    }

    async fn close(&self) -> StoreResult<()> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!("Redis store closed");
        }
        Ok(())
    }

    async fn ping(&self) -> bool {
        match self.connection() {
            Ok(mut conn) => conn.ping::<()>().await.is_ok(),
            Err(_) => false,
        }
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
