//! # Response Envelopes
//!
//! Standard JSON wrappers returned by the catalog endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Product;
use crate::query::{FilterEcho, Pagination};

/// Listing response: one page plus pagination/filter metadata
#[derive(Debug, Clone, Serialize)]
pub struct ListEnvelope {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    pub filters: FilterEcho,
}

/// Single-record response with a human-readable message
#[derive(Debug, Clone, Serialize)]
pub struct ProductEnvelope {
    pub product: Product,
    pub message: String,
}

impl ProductEnvelope {
    pub fn new(product: Product, message: impl Into<String>) -> Self {
        Self {
            product,
            message: message.into(),
        }
    }
}

/// Name-search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchEnvelope {
    pub query: String,
    pub results: Vec<Product>,
    pub count: usize,
    pub message: String,
}

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthEnvelope {
    pub service: &'static str,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthEnvelope {
    pub fn ok() -> Self {
        Self {
            service: "stockroom",
            status: "ok",
            timestamp: Utc::now(),
        }
    }
}

/// Fallback body for unmatched routes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNotFoundEnvelope {
    pub error: &'static str,
    pub message: String,
    pub available_routes: Vec<&'static str>,
}

/// The routes advertised by the fallback handler
pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET /health",
    "GET /api/products",
    "GET /api/products/search",
    "GET /api/products/stats",
    "GET /api/products/{id}",
    "POST /api/products",
    "PUT /api/products/{id}",
    "DELETE /api/products/{id}",
];
