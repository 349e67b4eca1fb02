//! Edge REST API Routes
//!
//! Axum route handlers for the two core operations: inserting an edge and
//! minting a new point identifier, plus read-back of a stored edge by id.
//!
//! The handlers are the sole callers of the executor. Insert and read-back
//! take the executor lock because they use the single owned connection;
//! `new_point` does not.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use graft_core::{EdgeForm, PointId};

use crate::{
    error::{ApiError, ApiResult},
    executor::EdgeExecutor,
    types::{IdResponse, InsertEdgeRequest},
};

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared application state for edge routes.
///
/// The mutex serializes every operation that touches the executor's owned
/// connection; a single connection handle must not run two statements
/// concurrently.
#[derive(Clone)]
pub struct EdgeState {
    pub executor: Arc<Mutex<EdgeExecutor>>,
}

impl EdgeState {
    pub fn new(executor: Arc<Mutex<EdgeExecutor>>) -> Self {
        Self { executor }
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /{name}/insert_edge - Create a new edge
///
/// Returns the server-generated id. Any `id` field in the request body is
/// dropped during decoding and never reaches the store.
pub async fn insert_edge(
    State(state): State<Arc<EdgeState>>,
    Json(req): Json<InsertEdgeRequest>,
) -> ApiResult<impl IntoResponse> {
    let form: EdgeForm = req.into();

    let mut executor = state.executor.lock().await;
    let id = executor.insert_edge(&form).await?;

    Ok(Json(IdResponse { id }))
}

/// POST /{name}/new_point - Mint a new point identifier
///
/// The request body is ignored. No persistence, no executor lock.
pub async fn new_point() -> Json<IdResponse> {
    Json(IdResponse {
        id: EdgeExecutor::new_point(),
    })
}

/// GET /{name}/edge/{id} - Read back a stored edge
pub async fn get_edge(
    State(state): State<Arc<EdgeState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let id = PointId::from(id);

    let executor = state.executor.lock().await;
    let edge = executor.edge_get(id).await?;

    match edge {
        Some(e) => Ok(Json(e)),
        None => Err(ApiError::edge_not_found(id)),
    }
}

// ============================================================================
// ROUTER FACTORY
// ============================================================================

/// Create the edge router. The caller nests it under the configured
/// service-name prefix.
pub fn create_router(executor: Arc<Mutex<EdgeExecutor>>) -> axum::Router {
    let state = Arc::new(EdgeState::new(executor));

    axum::Router::new()
        .route("/insert_edge", axum::routing::post(insert_edge))
        .route("/new_point", axum::routing::post(new_point))
        .route("/edge/:id", axum::routing::get(get_edge))
        .with_state(state)
}
