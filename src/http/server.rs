//! # HTTP Server
//!
//! Binds the catalog router to a socket with CORS and request tracing
//! layers applied.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::routes::{catalog_router, CatalogState};

/// HTTP server for the catalog API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the router over a seeded store with middleware layers
    fn build_router(config: &ServerConfig) -> Router {
        let state = Arc::new(CatalogState::seeded());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        catalog_router(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start serving (async)
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting stockroom HTTP server");
        tracing::info!("health check: http://{}/health", addr);
        tracing::info!("products API: http://{}/api/products", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        let _router = server.router();
    }

    #[test]
    fn test_custom_config() {
        let server = HttpServer::with_config(ServerConfig::with_addr("127.0.0.1", 9999));
        assert_eq!(server.config.socket_addr(), "127.0.0.1:9999");
    }
}
