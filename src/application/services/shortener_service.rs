//! Shortening policy: decides which short code a URL gets and persists it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::entities::{ShortenResult, SlugType, UrlMapping};
use crate::domain::repositories::{StoreError, StoreResult, UrlStore};
use crate::domain::slug::{clean_slug, is_reserved};
use crate::domain::slug_generator::{GeneratorError, SlugGenerator};
use crate::error::AppError;
use crate::utils::hasher::short_hash;
use crate::utils::url_validator::normalize;

/// Fixed lifetime of every mapping (one year).
pub const DEFAULT_LINK_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Tunables for [`ShortenerService`].
#[derive(Debug, Clone)]
pub struct ShortenerSettings {
    /// Prefix of every `short_url`, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub link_ttl: Duration,
    /// Deadline for each individual store call.
    pub store_timeout: Duration,
    /// Deadline for one generator call.
    pub generator_timeout: Duration,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            link_ttl: DEFAULT_LINK_TTL,
            store_timeout: Duration::from_secs(2),
            generator_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates and resolves short links.
///
/// # Policy
///
/// 1. Normalize the URL (rejects invalid input before any store call)
/// 2. If a generator is configured, ask it for a slug; on error, timeout,
///    unusable output, or a slug reserved by a fixed route, fall through to
///    hashing
/// 3. Look the slug up; if it is free, write it with set-if-absent
/// 4. Otherwise use the URL's hash-based code and overwrite whatever the
///    code held before
///
/// The store is never written before the final code is chosen, and the
/// service keeps no mapping state of its own.
pub struct ShortenerService {
    store: Arc<dyn UrlStore>,
    generator: Option<Arc<dyn SlugGenerator>>,
    settings: ShortenerSettings,
}

impl ShortenerService {
    /// Creates a new shortener. Pass `None` to disable slug generation.
    pub fn new(
        store: Arc<dyn UrlStore>,
        generator: Option<Arc<dyn SlugGenerator>>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            store,
            generator,
            settings,
        }
    }

    pub fn is_generator_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Shortens `raw_url` and stores the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid (nothing is
    /// read from or written to the store).
    ///
    /// Returns [`AppError::Internal`] if the store fails or times out, either
    /// during the slug availability check or while persisting.
    pub async fn create_short_url(&self, raw_url: &str) -> Result<ShortenResult, AppError> {
        let url = normalize(raw_url)?;

        if let Some(slug) = self.claim_generated_slug(&url).await? {
            info!(short_code = %slug, "Using generator-derived slug");
            return Ok(self.result(url, slug, SlugType::GeneratorDerived));
        }

        let code = short_hash(&url);
        debug!(short_code = %code, "Using hash-based slug");

        self.bounded(self.store.store(&code, &url, self.settings.link_ttl))
            .await
            .map_err(|e| AppError::storage("Failed to store URL", &e))?;

        self.log_stored(&code, &url);
        Ok(self.result(url, code, SlugType::HashBased))
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never stored or has
    /// expired, and [`AppError::Internal`] if the store could not answer.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.bounded(self.store.get(short_code))
            .await
            .map_err(|e| AppError::storage("Failed to look up short URL", &e))?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({})))
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), code)
    }

    /// Tries to obtain and persist a generator slug.
    ///
    /// Returns `Ok(None)` whenever the policy should fall back to hashing.
    /// Store failures are not treated as "slug available": they abort the
    /// request.
    async fn claim_generated_slug(&self, url: &str) -> Result<Option<String>, AppError> {
        let Some(generator) = &self.generator else {
            return Ok(None);
        };

        let candidate = match self.request_slug(generator.as_ref(), url).await {
            Ok(candidate) => candidate,
            Err(e) => {
                warn!(
                    generator = generator.name(),
                    error = %e,
                    "Slug generation failed, falling back to hash"
                );
                return Ok(None);
            }
        };

        if is_reserved(&candidate) {
            info!(slug = %candidate, "Generated slug is reserved, falling back to hash");
            return Ok(None);
        }

        let existing = self
            .bounded(self.store.get(&candidate))
            .await
            .map_err(|e| AppError::storage("Failed to check slug availability", &e))?;

        if existing.is_some() {
            info!(slug = %candidate, "Generated slug already exists, falling back to hash");
            return Ok(None);
        }

        let written = self
            .bounded(
                self.store
                    .store_if_absent(&candidate, url, self.settings.link_ttl),
            )
            .await
            .map_err(|e| AppError::storage("Failed to store URL", &e))?;

        if !written {
            info!(
                slug = %candidate,
                "Generated slug was claimed concurrently, falling back to hash"
            );
            return Ok(None);
        }

        self.log_stored(&candidate, url);
        Ok(Some(candidate))
    }

    async fn request_slug(
        &self,
        generator: &dyn SlugGenerator,
        url: &str,
    ) -> Result<String, GeneratorError> {
        let raw = timeout(self.settings.generator_timeout, generator.generate(url))
            .await
            .map_err(|_| GeneratorError::Timeout)??;

        clean_slug(&raw).ok_or(GeneratorError::InvalidSlug(raw))
    }

    /// Applies the per-call store deadline.
    async fn bounded<T>(&self, call: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        timeout(self.settings.store_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.settings.store_timeout))?
    }

    fn log_stored(&self, code: &str, url: &str) {
        let mapping = UrlMapping::new(code, url, self.settings.link_ttl);
        info!(
            short_code = %mapping.short_code,
            original_url = %mapping.original_url,
            expires_at = %mapping.expires_at,
            "Stored URL mapping"
        );
    }

    fn result(
        &self,
        original_url: String,
        short_code: String,
        slug_type: SlugType,
    ) -> ShortenResult {
        ShortenResult {
            short_url: self.short_url(&short_code),
            original_url,
            short_code,
            slug_type,
        }
    }
}
