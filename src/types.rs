//! Public types for the Engram unified API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Model types
pub use engram_core::{Edge, Embedding, MemoryMatch, MemoryRecord, Node, QueryMatch, VectorPoint};

// Error taxonomy
pub use engram_core::{EngramError, EngramResult};

// Backend contracts (implement these to plug in networked stores)
pub use engram_core::{GraphBackend, RecordBackend, VectorBackend};
