//! Capability traits the coordinator depends on.
//!
//! Each of the three storage dependencies is a narrow trait, so the
//! coordinator composes equally well with the in-memory stores of this
//! workspace, adapters for networked engines, or stubs in tests. All
//! implementations must be shareable across threads; the blanket `Arc`
//! impls let one store instance back several consumers.

use std::sync::Arc;

use crate::error::EngramResult;
use crate::types::{MemoryRecord, Node, QueryMatch, VectorPoint};

/// Relational-style persistence for users, memories and embeddings.
///
/// Ids are sequential from 1, one independent counter per entity.
pub trait RecordBackend: Send + Sync {
    /// Append a user, returning its generated id.
    fn create_user(&self, username: &str) -> EngramResult<i64>;

    /// Append a memory record, returning its generated id.
    fn create_memory(&self, user_id: i64, content: &str) -> EngramResult<i64>;

    /// Append the embedding for an existing memory.
    ///
    /// Fails with a validation error when `memory_id` does not reference
    /// an existing record.
    fn add_embedding(&self, memory_id: i64, vector: &[f32]) -> EngramResult<()>;

    /// Fetch a memory record; not-found for an unknown id.
    fn get_memory(&self, id: i64) -> EngramResult<MemoryRecord>;
}

/// Nearest-neighbor search over named vector collections.
pub trait VectorBackend: Send + Sync {
    /// Insert or replace points keyed by id within a collection.
    fn upsert(&self, collection: &str, points: Vec<VectorPoint>) -> EngramResult<()>;

    /// Return up to `limit` entries ordered by descending similarity.
    ///
    /// An unknown or empty collection yields an empty result, not an
    /// error; a dimensionality mismatch is a validation error.
    fn query(
        &self,
        collection: &str,
        vector: &[f32],
        limit: usize,
    ) -> EngramResult<Vec<QueryMatch>>;
}

/// Directed property-graph storage.
pub trait GraphBackend: Send + Sync {
    /// Store a node, returning its generated id.
    fn create_node(&self, label: &str, props: Option<serde_json::Value>) -> EngramResult<String>;

    /// Append a directed, typed edge, returning its generated id.
    fn create_edge(
        &self,
        from: &str,
        to: &str,
        edge_type: &str,
        props: Option<serde_json::Value>,
    ) -> EngramResult<String>;

    /// Nodes one outgoing hop away over edges of exactly `edge_type`,
    /// in edge-insertion order.
    fn neighbors(&self, node_id: &str, edge_type: &str) -> EngramResult<Vec<Node>>;
}

impl<T: RecordBackend + ?Sized> RecordBackend for Arc<T> {
    fn create_user(&self, username: &str) -> EngramResult<i64> {
        (**self).create_user(username)
    }

    fn create_memory(&self, user_id: i64, content: &str) -> EngramResult<i64> {
        (**self).create_memory(user_id, content)
    }

    fn add_embedding(&self, memory_id: i64, vector: &[f32]) -> EngramResult<()> {
        (**self).add_embedding(memory_id, vector)
    }

    fn get_memory(&self, id: i64) -> EngramResult<MemoryRecord> {
        (**self).get_memory(id)
    }
}

impl<T: VectorBackend + ?Sized> VectorBackend for Arc<T> {
    fn upsert(&self, collection: &str, points: Vec<VectorPoint>) -> EngramResult<()> {
        (**self).upsert(collection, points)
    }

    fn query(
        &self,
        collection: &str,
        vector: &[f32],
        limit: usize,
    ) -> EngramResult<Vec<QueryMatch>> {
        (**self).query(collection, vector, limit)
    }
}

impl<T: GraphBackend + ?Sized> GraphBackend for Arc<T> {
    fn create_node(&self, label: &str, props: Option<serde_json::Value>) -> EngramResult<String> {
        (**self).create_node(label, props)
    }

    fn create_edge(
        &self,
        from: &str,
        to: &str,
        edge_type: &str,
        props: Option<serde_json::Value>,
    ) -> EngramResult<String> {
        (**self).create_edge(from, to, edge_type, props)
    }

    fn neighbors(&self, node_id: &str, edge_type: &str) -> EngramResult<Vec<Node>> {
        (**self).neighbors(node_id, edge_type)
    }
}
