//! # HTTP Layer
//!
//! Axum server, routing, request gates, and response envelopes for the
//! catalog API.

pub mod auth;
pub mod config;
pub mod response;
pub mod routes;
pub mod server;
pub mod validation;

pub use auth::{authenticate, Identity};
pub use config::ServerConfig;
pub use routes::{catalog_router, CatalogState};
pub use server::HttpServer;
pub use validation::{validate_product, ProductInput};
