//! Outcome of a shortening request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch of the shortening policy produced a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugType {
    /// Readable slug proposed by the slug generator.
    GeneratorDerived,
    /// Base62 fingerprint of the URL.
    HashBased,
}

impl SlugType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeneratorDerived => "generator_derived",
            Self::HashBased => "hash_based",
        }
    }
}

impl fmt::Display for SlugType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted short link as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenResult {
    pub original_url: String,
    pub short_code: String,
    pub short_url: String,
    pub slug_type: SlugType,
}
