//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the store answers PING.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: `{"status": "healthy", "storage": "redis"}`
/// - **503 Service Unavailable**: `{"status": "degraded", "storage": "redis"}`
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let healthy = state.store.ping().await;

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        storage: state.store.backend().to_string(),
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
