//! Edge Executor
//!
//! The executor mediates all writes to the edge table through one owned
//! connection; it is the only path by which an edge row is created.
//!
//! Each insert is one transaction: generate id, execute a single
//! parameterized INSERT, commit. If the insert or the commit fails, the
//! transaction is rolled back (dropping an uncommitted transaction rolls it
//! back on the wire) and the generated id is discarded, never retried.
//!
//! CRITICAL: a single connection handle must not execute statements
//! concurrently. Callers that share an executor across tasks must serialize
//! access to it (the API layer wraps it in `Arc<tokio::sync::Mutex<_>>`).
//! `new_point` touches neither the connection nor any shared state and may
//! run fully in parallel.

use graft_core::{Edge, EdgeForm, PersistenceError, PersistenceResult, PointId};
use tokio_postgres::Client;

const INSERT_EDGE: &str =
    "INSERT INTO edge_t (id, context, source, code, target) VALUES ($1, $2, $3, $4, $5)";

const SELECT_EDGE: &str = "SELECT id, context, source, code, target FROM edge_t WHERE id = $1";

/// Owns the single transactional connection to the edge table.
pub struct EdgeExecutor {
    client: Client,
}

impl EdgeExecutor {
    /// Take ownership of a live connection for the executor's lifetime.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Insert one edge row and return its server-generated id.
    ///
    /// Any id the caller supplied in the input has already been dropped
    /// during request decoding; the id persisted here is always freshly
    /// generated. Exactly one complete row is appended, or none.
    pub async fn insert_edge(&mut self, form: &EdgeForm) -> PersistenceResult<PointId> {
        let id = PointId::generate();

        let tx = self
            .client
            .transaction()
            .await
            .map_err(|e| PersistenceError::connection(e.to_string()))?;

        tx.execute(
            INSERT_EDGE,
            &[
                &id.to_string(),
                &form.context,
                &form.source,
                &form.code,
                &form.target,
            ],
        )
        .await
        .map_err(|e| PersistenceError::insert(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| PersistenceError::commit(e.to_string()))?;

        Ok(id)
    }

    /// Mint a fresh point identifier.
    ///
    /// No transaction, no I/O, cannot fail. Needs no access to the owned
    /// connection, so callers sharing an executor behind a mutex can mint
    /// points without taking the lock.
    pub fn new_point() -> PointId {
        PointId::generate()
    }

    /// Read back a single edge by primary key.
    pub async fn edge_get(&self, id: PointId) -> PersistenceResult<Option<Edge>> {
        let row = self
            .client
            .query_opt(SELECT_EDGE, &[&id.to_string()])
            .await
            .map_err(|e| PersistenceError::read(e.to_string()))?;

        row.map(|row| {
            let stored_id: String = row
                .try_get("id")
                .map_err(|e| PersistenceError::read(e.to_string()))?;
            Ok(Edge {
                id: stored_id
                    .parse()
                    .map_err(|e: uuid::Error| PersistenceError::read(e.to_string()))?,
                context: row
                    .try_get("context")
                    .map_err(|e| PersistenceError::read(e.to_string()))?,
                source: row
                    .try_get("source")
                    .map_err(|e| PersistenceError::read(e.to_string()))?,
                code: row
                    .try_get("code")
                    .map_err(|e| PersistenceError::read(e.to_string()))?,
                target: row
                    .try_get("target")
                    .map_err(|e| PersistenceError::read(e.to_string()))?,
            })
        })
        .transpose()
    }

    /// Connectivity probe for the readiness endpoint.
    pub async fn ping(&self) -> PersistenceResult<()> {
        self.client
            .simple_query("SELECT 1")
            .await
            .map(|_| ())
            .map_err(|e| PersistenceError::connection(e.to_string()))
    }
}
