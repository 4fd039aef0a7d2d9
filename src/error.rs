// SPDX-License-Identifier: MIT

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

/// JSON error response body.
///
/// Every error carries a human-readable `msg`; store failures additionally
/// pass the underlying driver message through in `error` (unhardened by
/// design, see DESIGN.md).
#[derive(Serialize)]
struct ErrorResponse {
    msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg, error) = match &self {
            AppError::Validation(msg) => {
                tracing::warn!(reason = %msg, "Request validation failed");
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::InvalidCredentials => {
                tracing::warn!("Login rejected: no matching account");
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string(), None)
            }
            AppError::Conflict(msg) => {
                tracing::warn!(reason = %msg, "Request conflict");
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                    Some(err.clone()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                    Some(err.to_string()),
                )
            }
        };

        let body = ErrorResponse { msg, error };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
