//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `301 Moved Permanently` and a `Location` header. Unknown and
/// expired codes yield `404 {"error": "Short URL not found"}`; a store failure
/// yields 500 rather than 404.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.shortener.resolve(&code).await?;

    debug!(short_code = %code, location = %original_url, "Redirecting");

    // `Redirect::permanent` answers 308; clients expect 301 here.
    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, original_url)],
    ))
}
