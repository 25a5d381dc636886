//! Readable slug generation capability.

use async_trait::async_trait;

/// Errors raised while asking a generator for a slug.
///
/// These never reach API clients: the shortening policy logs them and falls
/// back to a hash-based code.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Slug generator request failed: {0}")]
    Request(String),

    #[error("Slug generator returned no candidates")]
    EmptyResponse,

    #[error("Slug generator output {0:?} is not a usable slug")]
    InvalidSlug(String),

    #[error("Slug generator timed out")]
    Timeout,
}

/// Proposes a short, human-readable code for a URL.
///
/// On success the candidate matches `[a-z0-9-]{3,8}` with no leading or
/// trailing hyphen (see [`crate::domain::slug::clean_slug`]). Generators do
/// not check availability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlugGenerator: Send + Sync {
    /// Proposes a slug for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError`] if no usable candidate could be produced.
    async fn generate(&self, url: &str) -> Result<String, GeneratorError>;

    /// Generator name for logs.
    fn name(&self) -> &'static str;
}
