//! Graft core domain types
//!
//! This crate holds the database- and HTTP-free parts of Graft:
//! - Point identifiers and their generation
//! - The Edge record and its input form
//! - Persistence error types
//!
//! Everything that talks to PostgreSQL or serves HTTP lives in graft-api.

pub mod edge;
pub mod error;
pub mod ident;

// Re-export commonly used types
pub use edge::{Edge, EdgeForm};
pub use error::{PersistenceError, PersistenceResult};
pub use ident::PointId;
