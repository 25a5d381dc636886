//! In-process store for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, StoreResult, UrlStore};

/// A [`UrlStore`] backed by a `HashMap`.
///
/// Expired mappings are treated as absent. They are evicted when read and
/// swept on every write, so the map only holds live entries plus those not
/// yet touched since expiring. State is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, UrlMapping>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (mappings are not persisted)");
        Self::default()
    }

    /// Number of live mappings.
    pub async fn len(&self) -> usize {
        let now = Utc::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|mapping| !mapping.is_expired_at(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn sweep_expired(entries: &mut HashMap<String, UrlMapping>) {
        let now = Utc::now();
        entries.retain(|_, mapping| !mapping.is_expired_at(now));
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn store(&self, short_code: &str, original_url: &str, ttl: Duration) -> StoreResult<()> {
        self.ensure_open()?;

        let mapping = UrlMapping::new(short_code, original_url, ttl);
        let mut entries = self.entries.write().await;
        Self::sweep_expired(&mut entries);
        entries.insert(short_code.to_string(), mapping);

        Ok(())
    }

    async fn store_if_absent(
        &self,
        short_code: &str,
        original_url: &str,
        ttl: Duration,
    ) -> StoreResult<bool> {
        self.ensure_open()?;

        let mut entries = self.entries.write().await;
        Self::sweep_expired(&mut entries);
        if entries
            .get(short_code)
            .is_some_and(|existing| !existing.is_expired())
        {
            return Ok(false);
        }

        entries.insert(
            short_code.to_string(),
            UrlMapping::new(short_code, original_url, ttl),
        );
        Ok(true)
    }

    async fn get(&self, short_code: &str) -> StoreResult<Option<String>> {
        self.ensure_open()?;

        {
            let entries = self.entries.read().await;
            match entries.get(short_code) {
                None => return Ok(None),
                Some(mapping) if !mapping.is_expired() => {
                    return Ok(Some(mapping.original_url.clone()));
                }
                Some(_) => {}
            }
        }

        // Expired: re-check under the write lock, a concurrent write may have
        // replaced it.
        let mut entries = self.entries.write().await;
        match entries.get(short_code) {
            Some(mapping) if !mapping.is_expired() => Ok(Some(mapping.original_url.clone())),
            Some(_) => {
                entries.remove(short_code);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, short_code: &str) -> StoreResult<bool> {
        self.ensure_open()?;

        let removed = self.entries.write().await.remove(short_code);
        Ok(removed.is_some_and(|mapping| !mapping.is_expired()))
    }

    async fn close(&self) -> StoreResult<()> {
        self.closed.store(true, Ordering::Release);
        self.entries.write().await.clear();
        Ok(())
    }

    async fn ping(&self) -> bool {
        !self.closed.load(Ordering::Acquire)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn test_store_and_get() {
        let store = MemoryStore::new();
        store.store("abc", "https://example.com", TTL).await.unwrap();

        assert_eq!(
            store.get("abc").await.unwrap().as_deref(),
            Some("https://example.com")
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_code() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_overwrites() {
        let store = MemoryStore::new();
        store.store("abc", "https://one.com", TTL).await.unwrap();
        store.store("abc", "https://two.com", TTL).await.unwrap();

        assert_eq!(
            store.get("abc").await.unwrap().as_deref(),
            Some("https://two.com")
        );
    }

    #[tokio::test]
    async fn test_expired_mapping_is_absent() {
        let store = MemoryStore::new();
        store
            .store("gone", "https://example.com", Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(store.get("gone").await.unwrap(), None);
        assert!(!store.delete("gone").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_evicts_expired_mapping() {
        let store = MemoryStore::new();
        store
            .store("gone", "https://example.com", Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(store.get("gone").await.unwrap(), None);
        assert!(!store.entries.read().await.contains_key("gone"));
    }

    #[tokio::test]
    async fn test_writes_sweep_expired_mappings() {
        let store = MemoryStore::new();
        for code in ["old1", "old2", "old3"] {
            store
                .store(code, "https://example.com", Duration::ZERO)
                .await
                .unwrap();
        }

        store.store("live", "https://example.com", TTL).await.unwrap();
        assert_eq!(store.entries.read().await.len(), 1);

        store
            .store("old4", "https://example.com", Duration::ZERO)
            .await
            .unwrap();
        store
            .store_if_absent("ghub", "https://github.com", TTL)
            .await
            .unwrap();

        let entries = store.entries.read().await;
        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("live") && entries.contains_key("ghub"));
    }

    #[tokio::test]
    async fn test_store_if_absent() {
        let store = MemoryStore::new();

        assert!(
            store
                .store_if_absent("ghub", "https://github.com", TTL)
                .await
                .unwrap()
        );
        assert!(
            !store
                .store_if_absent("ghub", "https://gitlab.com", TTL)
                .await
                .unwrap()
        );
        assert_eq!(
            store.get("ghub").await.unwrap().as_deref(),
            Some("https://github.com")
        );
    }

    #[tokio::test]
    async fn test_store_if_absent_replaces_expired() {
        let store = MemoryStore::new();
        store
            .store("ghub", "https://old.com", Duration::ZERO)
            .await
            .unwrap();

        assert!(
            store
                .store_if_absent("ghub", "https://github.com", TTL)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.store("abc", "https://example.com", TTL).await.unwrap();

        assert!(store.delete("abc").await.unwrap());
        assert!(!store.delete("abc").await.unwrap());
        assert_eq!(store.get("abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_closed_store_rejects_calls() {
        let store = MemoryStore::new();
        store.close().await.unwrap();

        assert!(!store.ping().await);
        assert!(matches!(store.get("abc").await, Err(StoreError::Closed)));
        assert!(matches!(
            store.store("abc", "https://example.com", TTL).await,
            Err(StoreError::Closed)
        ));
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(MemoryStore::new().backend(), "memory");
    }
}
