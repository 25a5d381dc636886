//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`     - Short link redirect (301)
//! - `GET  /health`     - Store connectivity check
//! - `POST /api/urls`   - Create a short URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single configured frontend origin
//! - **Path normalization** - Trailing slash handling

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;

/// Builds the router without path normalization.
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn build_router(state: AppState, cors_origin: &str) -> Result<Router> {
    Ok(Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(cors_origin)?)
        .layer(tracing::layer()))
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/urls/` reaches the
/// same handler as `/api/urls`.
///
/// # Errors
///
/// See [`build_router`].
pub fn app_router(state: AppState, cors_origin: &str) -> Result<NormalizePath<Router>> {
    let router = build_router(state, cors_origin)?;
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
