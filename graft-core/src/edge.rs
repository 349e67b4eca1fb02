//! Edge records
//!
//! An edge is a directed, labeled relation between two points: a `source`
//! and a `target`, classified by a caller-supplied `context` and a relation
//! `code`. Edges are created in a single atomic step and never updated or
//! deleted.

use serde::{Deserialize, Serialize};

use crate::ident::PointId;

/// A persisted edge row.
///
/// `id` is assigned by the server exactly once, before the row is written.
/// `source` and `target` are free-form point references; the schema does
/// not constrain them to previously minted identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: PointId,
    pub context: String,
    pub source: String,
    pub code: String,
    pub target: String,
}

/// Input form for creating an edge.
///
/// Deliberately has no `id` field: the id is generated server-side at
/// insert time, and any id the caller put in the request body is dropped
/// during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeForm {
    pub context: String,
    pub source: String,
    pub code: String,
    pub target: String,
}

impl EdgeForm {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        code: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            code: code.into(),
            target: target.into(),
        }
    }

    /// Attach the server-generated id, producing the record to persist.
    pub fn into_edge(self, id: PointId) -> Edge {
        Edge {
            id,
            context: self.context,
            source: self.source,
            code: self.code,
            target: self.target,
        }
    }
}
