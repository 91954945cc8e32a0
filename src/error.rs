//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key failed the store's constraints (empty or too long after trimming)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Request body failed validation before reaching the store
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Backend failure in the storage layer
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        // Wire contract: validation failures carry `error: "ValidationError"`
        let (status, label, detail) = match &self {
            CacheError::InvalidKey(msg) => {
                (StatusCode::BAD_REQUEST, "ValidationError", msg.clone())
            }
            CacheError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "ValidationError", msg.clone())
            }
            CacheError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                msg.clone(),
            ),
        };

        let body = Json(json!({
            "error": label,
            "detail": detail,
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
