//! Engram: an embedded memory coordinator.
//!
//! One logical "memory" is written across three differently-shaped
//! stores — a record store for the text, a vector index for similarity
//! search, and a property graph for entity relationships — and read
//! back through a single coordinator contract.
//!
//! The stores are in-process reference implementations of three narrow
//! backend traits; adapters for networked SQL, vector-search or graph
//! engines can stand in behind the same traits without touching the
//! coordinator.
//!
//! # Example
//!
//! ```
//! use engram::{Coordinator, GraphStore, RecordStore, VectorIndex};
//!
//! let coordinator = Coordinator::new(RecordStore::new(), VectorIndex::new(), GraphStore::new());
//!
//! let id = coordinator.store_memory(1, "the sky was green that day", &[0.1, 0.9]).unwrap();
//! let hits = coordinator.search(&[0.1, 0.9], 1).unwrap();
//! assert_eq!(hits[0].memory_id, id);
//!
//! let memory = coordinator.get_memory(id).unwrap();
//! assert_eq!(memory.content, "the sky was green that day");
//! ```

pub mod types;

pub use engram_coordinator::{Coordinator, MEMORIES_COLLECTION};
pub use engram_graph::GraphStore;
pub use engram_record::RecordStore;
pub use engram_vector::VectorIndex;

pub use types::*;
