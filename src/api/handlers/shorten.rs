//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for one long URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// ```json
/// { "url": "github.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://github.com",
///   "short_code": "ghub",
///   "short_url": "http://localhost:8080/ghub",
///   "slug_type": "generator_derived"
/// }
/// ```
///
/// # Errors
///
/// - 400 `Invalid JSON` if the body cannot be parsed
/// - 400 `Invalid URL` if validation fails
/// - 500 if the store fails or times out
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload?;

    let result = state.shortener.create_short_url(&request.url).await?;

    Ok(Json(result.into()))
}
