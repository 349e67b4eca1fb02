//! Database Connection Module
//!
//! This module provides the PostgreSQL connection configuration and the
//! single-connection setup used by the edge executor.
//!
//! Graft deliberately does not pool connections: the executor owns exactly
//! one connection for its entire lifetime, and all statement execution on
//! it is serialized (see `executor`).

use std::time::Duration;

use tokio_postgres::{Client, NoTls};

use crate::error::{ApiError, ApiResult};

// ============================================================================
// CONNECTION CONFIGURATION
// ============================================================================

/// Database connection configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "graft".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GRAFT_DB_HOST`: PostgreSQL host (default: localhost)
    /// - `GRAFT_DB_PORT`: PostgreSQL port (default: 5432)
    /// - `GRAFT_DB_NAME`: Database name (default: graft)
    /// - `GRAFT_DB_USER`: Database user (default: postgres)
    /// - `GRAFT_DB_PASSWORD`: Database password (default: empty)
    /// - `GRAFT_DB_CONNECT_TIMEOUT`: Connection timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("GRAFT_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("GRAFT_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("GRAFT_DB_NAME").unwrap_or_else(|_| "graft".to_string()),
            user: std::env::var("GRAFT_DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("GRAFT_DB_PASSWORD").unwrap_or_default(),
            connect_timeout: Duration::from_secs(
                std::env::var("GRAFT_DB_CONNECT_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// Open a single connection from this configuration.
    ///
    /// The tokio-postgres connection driver is spawned onto the runtime;
    /// statement timeouts and connection drops surface as errors on the
    /// returned client.
    pub async fn connect(&self) -> ApiResult<Client> {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password)
            .connect_timeout(self.connect_timeout);

        let (client, connection) = pg_config.connect(NoTls).await.map_err(|e| {
            ApiError::service_unavailable(format!(
                "Failed to connect to {}:{}/{}: {}",
                self.host, self.port, self.dbname, e
            ))
        })?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("Database connection error: {}", e);
            }
        });

        Ok(client)
    }
}
