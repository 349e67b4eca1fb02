//! REST API Routes Module
//!
//! Contains the edge routes (insert_edge, new_point, read-back) and the
//! health check endpoints, plus the top-level router factory that nests
//! them under their path prefixes and applies the shared middleware stack.

pub mod edge;
pub mod health;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::executor::EdgeExecutor;

// Re-export route creation functions for convenience
pub use edge::create_router as edge_router;
pub use health::create_router as health_router;

/// Create the complete API router.
///
/// Edge routes are nested under the configured service name
/// (`/{name}/insert_edge`, `/{name}/new_point`, `/{name}/edge/{id}`);
/// health endpoints live under `/health`.
pub fn create_api_router(
    executor: Arc<Mutex<EdgeExecutor>>,
    config: &ApiConfig,
) -> ApiResult<Router> {
    config.validate()?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest("/health", health_router(executor.clone()))
        .nest(
            &format!("/{}", config.service_name),
            edge_router(executor),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors);

    Ok(router)
}
