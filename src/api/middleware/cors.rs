//! CORS policy for the browser frontend.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Builds a CORS layer that admits a single frontend origin.
///
/// Allows `GET`, `POST` and `OPTIONS` with a `Content-Type` header, which is
/// all the shortening form needs.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub fn layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("Invalid CORS origin: {origin}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
