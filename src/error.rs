//! Application error type and its HTTP representation.
//!
//! Every error becomes a JSON body of the form
//!
//! ```json
//! { "error": "Invalid URL", "details": { "reason": "URL must have a valid domain" } }
//! ```
//!
//! where `details` is omitted when empty.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;
use crate::utils::url_validator::UrlValidationError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "is_empty_details")]
    details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Errors surfaced to API clients.
///
/// - `Validation` - bad input, `400 Bad Request`
/// - `NotFound` - unknown or expired short code, `404 Not Found`
/// - `Internal` - storage failure, `500 Internal Server Error`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Wraps a storage failure with a request-specific message.
    ///
    /// The backend error is logged here and never reaches the client.
    pub fn storage(message: impl Into<String>, err: &StoreError) -> Self {
        let message = message.into();
        tracing::error!(
            error = %err,
            unavailable = err.is_unavailable(),
            "{}",
            message
        );
        Self::internal(message, json!({}))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UrlValidationError> for AppError {
    fn from(err: UrlValidationError) -> Self {
        Self::bad_request("Invalid URL", json!({ "reason": err.to_string() }))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::storage("Storage error", &err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("Invalid JSON", json!({ "reason": rejection.body_text() }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Internal { message, details } => (message, details),
        };

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %message,
                details = %details,
                "Request failed"
            );
        }

        (
            status,
            Json(ErrorBody {
                error: message,
                details,
            }),
        )
            .into_response()
    }
}
