//! DTOs for health check endpoint.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    /// Storage backend name (`redis`, `memory`).
    pub storage: String,
}
