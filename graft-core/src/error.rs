//! Error types for Graft persistence operations

use thiserror::Error;

/// Failure to insert, commit, or read back an edge row.
///
/// The executor does not retry and does not compensate; the error carries a
/// reason string and propagates to the caller unchanged. Retry policy, if
/// any, belongs to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Insert failed: {reason}")]
    Insert { reason: String },

    #[error("Commit failed: {reason}")]
    Commit { reason: String },

    #[error("Read failed: {reason}")]
    Read { reason: String },

    #[error("Connection failed: {reason}")]
    Connection { reason: String },
}

impl PersistenceError {
    pub fn insert(reason: impl Into<String>) -> Self {
        Self::Insert {
            reason: reason.into(),
        }
    }

    pub fn commit(reason: impl Into<String>) -> Self {
        Self::Commit {
            reason: reason.into(),
        }
    }

    pub fn read(reason: impl Into<String>) -> Self {
        Self::Read {
            reason: reason.into(),
        }
    }

    pub fn connection(reason: impl Into<String>) -> Self {
        Self::Connection {
            reason: reason.into(),
        }
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
