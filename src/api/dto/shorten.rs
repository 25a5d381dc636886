//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ShortenResult, SlugType};

/// Request to shorten a single URL.
///
/// A missing `url` field deserializes to the empty string and is then
/// rejected by URL validation ("URL is required").
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: String,
}

/// Successful shortening response.
///
/// ```json
/// {
///   "original_url": "https://github.com",
///   "short_code": "ghub",
///   "short_url": "http://localhost:8080/ghub",
///   "slug_type": "generator_derived"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub slug_type: SlugType,
}

impl From<ShortenResult> for ShortenResponse {
    fn from(result: ShortenResult) -> Self {
        Self {
            original_url: result.original_url,
            short_code: result.short_code,
            short_url: result.short_url,
            slug_type: result.slug_type,
        }
    }
}
