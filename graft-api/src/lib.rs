//! Graft API - HTTP ingestion layer for edge records
//!
//! This crate serves two operations over HTTP: creating edge records
//! (`insert_edge`) and minting new point identifiers (`new_point`),
//! persisting edges into a single PostgreSQL table through one owned
//! connection.
//!
//! The write path is the edge executor: generate id, insert one row,
//! commit. The HTTP layer (Axum) decodes request bodies, calls the
//! executor, and maps failures to structured JSON error responses.

pub mod config;
pub mod db;
pub mod error;
pub mod executor;
pub mod routes;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::DbConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use executor::EdgeExecutor;
pub use routes::create_api_router;
pub use types::{IdResponse, InsertEdgeRequest};
