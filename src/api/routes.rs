//! API route configuration.

use axum::{Router, routing::post};

use crate::api::handlers::shorten_handler;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /urls` - Create a short URL
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/urls", post(shorten_handler))
}
