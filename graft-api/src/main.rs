//! Graft API Server Entry Point
//!
//! Bootstraps configuration, opens the database connection, and starts the
//! Axum HTTP server.

use std::sync::Arc;

use axum::Router;
use graft_api::{create_api_router, ApiConfig, ApiError, ApiResult, DbConfig, EdgeExecutor};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_tracing()?;

    let api_config = ApiConfig::from_env();
    let db_config = DbConfig::from_env();

    tracing::info!("hello, this is {}", api_config.service_name);

    let client = db_config.connect().await?;
    let executor = Arc::new(Mutex::new(EdgeExecutor::new(client)));

    let app: Router = create_api_router(executor, &api_config)?;

    let addr = api_config.bind_addr()?;
    tracing::info!(%addr, "Starting Graft API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

fn init_tracing() -> ApiResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("graft_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))
}
