//! Core domain entities.
//!
//! - [`UrlMapping`] - A short code bound to an original URL with a fixed TTL
//! - [`ShortenResult`] - What a shortening request returns, with its [`SlugType`]

pub mod shorten_result;
pub mod url_mapping;

pub use shorten_result::{ShortenResult, SlugType};
pub use url_mapping::UrlMapping;
