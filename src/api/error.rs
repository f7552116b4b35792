//! Mapping application errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation error", "details": details })),
            )
                .into_response(),
            AppError::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("{} not found", kind) })),
            )
                .into_response(),
            AppError::LockPoisoned(what) => {
                error!("Request failed: could not lock {}", what);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Server error" })),
                )
                    .into_response()
            }
        }
    }
}
