//! # API Errors
//!
//! Error taxonomy for the catalog service. Every failure path maps to a
//! typed variant here; a single `IntoResponse` impl turns the variant into
//! the JSON envelope `{error, message, details?}` with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for handler operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Catalog service errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Payload failed validation; carries every violation found
    #[error("Invalid product data")]
    Validation(Vec<String>),

    /// Case-insensitive name collision
    #[error("{0}")]
    Conflict(String),

    /// Missing or empty credential header
    #[error("{0}")]
    Authentication(String),

    /// Search endpoint called without a query term
    #[error("Search query is required. Use ?q=searchterm or ?name=searchterm")]
    MissingSearchTerm,

    /// Request body was not valid JSON
    #[error("Invalid JSON format in request body")]
    InvalidJson,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything unanticipated
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingSearchTerm => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire-level error kind carried in the envelope's `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NotFoundError",
            ApiError::Validation(_) => "ValidationError",
            ApiError::Conflict(_) => "ConflictError",
            ApiError::Authentication(_) => "AuthenticationError",
            ApiError::MissingSearchTerm => "Bad Request",
            ApiError::InvalidJson => "Bad Request",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Internal error detail is exposed only in development mode
fn development_mode() -> bool {
    std::env::var("STOCKROOM_ENV").is_ok_and(|v| v == "development")
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        match &err {
            ApiError::Validation(violations) => Self {
                error: err.kind(),
                message: err.to_string(),
                details: Some(violations.clone()),
            },
            ApiError::Internal(detail) => Self {
                error: err.kind(),
                message: "An unexpected error occurred".to_string(),
                details: development_mode().then(|| vec![detail.clone()]),
            },
            _ => Self {
                error: err.kind(),
                message: err.to_string(),
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(detail = %detail, "unhandled internal error");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
