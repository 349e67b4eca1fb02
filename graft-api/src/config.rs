//! API Configuration Module
//!
//! Configuration for the HTTP listener and the service name used as the
//! URL path prefix. Loaded from environment variables with sensible
//! defaults for development.

use std::net::SocketAddr;

use crate::error::{ApiError, ApiResult};

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// HTTP listener and routing configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address to bind.
    pub bind_host: String,

    /// Port to listen on.
    pub port: u16,

    /// Service name, used as the URL path prefix for edge routes
    /// (e.g. `POST /{name}/insert_edge`).
    pub service_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 3000,
            service_name: "graft".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `GRAFT_API_BIND`: Host address to bind (default: 0.0.0.0)
    /// - `PORT` or `GRAFT_API_PORT`: Listen port (default: 3000)
    /// - `GRAFT_SERVICE_NAME`: URL path prefix (default: graft)
    pub fn from_env() -> Self {
        let bind_host =
            std::env::var("GRAFT_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("GRAFT_API_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let service_name =
            std::env::var("GRAFT_SERVICE_NAME").unwrap_or_else(|_| "graft".to_string());

        Self {
            bind_host,
            port,
            service_name,
        }
    }

    /// Resolve the socket address to bind.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
    }

    /// Check that the service name is usable as a single path segment.
    pub fn validate(&self) -> ApiResult<()> {
        if self.service_name.is_empty() {
            return Err(ApiError::invalid_input("Service name must not be empty"));
        }
        if self.service_name.contains('/') {
            return Err(ApiError::invalid_input(format!(
                "Service name '{}' must not contain '/'",
                self.service_name
            )));
        }
        Ok(())
    }
}
