use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use dqa_forms::error::FormError;
use dqa_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// Well-formed input that cannot be saved until the reviewer fixes it.
    Blocked(String),
    /// The tabular store rejected or failed the call.
    Store(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Blocked(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Store(msg) => {
                tracing::error!("store error: {msg}");
                (StatusCode::BAD_GATEWAY, format!("error saving or loading evaluations: {msg}"))
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Store(e.to_string())
    }
}

impl From<FormError> for ApiError {
    fn from(e: FormError) -> Self {
        match e {
            FormError::UnknownForm(id) => ApiError::NotFound(format!("form not found: {id}")),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}
