//! Helpers shared by the shortening policy, the HTTP layer and the admin CLI.
//!
//! - [`base62`] - Base62 encoding of numeric fingerprints
//! - [`hasher`] - Content-derived short codes
//! - [`url_validator`] - URL validation and normalization

pub mod base62;
pub mod hasher;
pub mod url_validator;
