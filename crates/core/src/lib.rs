//! Shared data model, error taxonomy and backend contracts for Engram.
//!
//! Everything the coordinator and the three stores exchange lives here:
//! the record/vector/graph model types, the [`EngramError`] taxonomy, and
//! the capability traits a backend must satisfy to be composed into the
//! coordinator.

pub mod backend;
pub mod error;
pub mod types;

pub use backend::{GraphBackend, RecordBackend, VectorBackend};
pub use error::{EngramError, EngramResult};
pub use types::{Edge, Embedding, MemoryMatch, MemoryRecord, Node, QueryMatch, VectorPoint};
