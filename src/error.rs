//! API error type shared by all HTTP handlers.
//!
//! Every failure is terminal for its request and leaves the store untouched.
//! Error responses are JSON objects `{"error": "<message>"}` with a matching
//! `Content-Type` (the original service advertised JSON while writing plain
//! text; that inconsistency is deliberately fixed here).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Get/Delete on an ID that is not in the store. Maps to 400, not 404,
    /// to preserve the original service's contract.
    #[error("Задача {0} не найдена")]
    TaskNotFound(String),

    /// Unreadable or malformed request body on Create.
    #[error("{0}")]
    BadRequest(String),

    /// Serialization failure or other internal error.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::TaskNotFound(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
