//! # Authentication Gate
//!
//! Header-presence check applied to mutating routes. Accepts `X-API-Key`
//! or `Authorization`; any non-empty value passes. No credential store is
//! consulted; the gate attaches a fixed demo identity.

use axum::http::HeaderMap;

use crate::errors::{ApiError, ApiResult};

/// Principal attached to authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
}

impl Identity {
    /// The fixed demo principal
    pub fn demo() -> Self {
        Self {
            id: "user123".to_string(),
            name: "Demo User".to_string(),
        }
    }
}

/// Check the credential headers on a mutating request
pub fn authenticate(headers: &HeaderMap) -> ApiResult<Identity> {
    let credential = headers
        .get("x-api-key")
        .or_else(|| headers.get("authorization"));

    let Some(value) = credential else {
        return Err(ApiError::Authentication(
            "Missing API key. Please provide X-API-Key header or Authorization header."
                .to_string(),
        ));
    };

    let value = value.to_str().unwrap_or("");
    if value.trim().is_empty() {
        return Err(ApiError::Authentication(
            "Invalid API key provided.".to_string(),
        ));
    }

    Ok(Identity::demo())
}
