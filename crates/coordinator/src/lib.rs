//! Coordinates one logical memory across the record store, the vector
//! index and the graph store.
//!
//! `store_memory` runs its three sub-steps in strict order with no
//! cross-store lock and no rollback: a failure part-way through leaves
//! the earlier steps in place. That consistency gap is deliberate and
//! documented; callers that retry a failed call may create a duplicate,
//! orphaned record.

use engram_core::{
    EngramResult, GraphBackend, MemoryMatch, MemoryRecord, RecordBackend, VectorBackend,
    VectorPoint,
};
use tracing::{trace, warn};

/// Collection in the vector index that holds memory embeddings.
pub const MEMORIES_COLLECTION: &str = "memories";

/// Orchestrates the three stores behind the public memory contract.
///
/// Generic over the backend traits so the in-memory stores of this
/// workspace, adapters for networked engines, and test stubs compose
/// interchangeably. Holds no state of its own; every call is a fixed
/// sequence of backend calls.
pub struct Coordinator<R, V, G> {
    records: R,
    vectors: V,
    graph: G,
}

impl<R, V, G> Coordinator<R, V, G>
where
    R: RecordBackend,
    V: VectorBackend,
    G: GraphBackend,
{
    /// Compose a coordinator from its three backends.
    pub fn new(records: R, vectors: V, graph: G) -> Self {
        Self {
            records,
            vectors,
            graph,
        }
    }

    /// Persist content and its embedding, then index it for search.
    ///
    /// Strict order: record create, embedding append, vector upsert
    /// under the id stringified into the `"memories"` collection. The
    /// first failure is returned as-is and completed steps are not
    /// rolled back, so a memory record can exist without an embedding
    /// or an index entry.
    pub fn store_memory(&self, user_id: i64, content: &str, vector: &[f32]) -> EngramResult<i64> {
        let id = self.records.create_memory(user_id, content).map_err(|e| {
            warn!(stage = "create", error = %e, "store_memory failed");
            e
        })?;
        self.records.add_embedding(id, vector).map_err(|e| {
            warn!(stage = "embed", memory_id = id, error = %e, "store_memory failed");
            e
        })?;
        let point = VectorPoint {
            id: id.to_string(),
            vector: vector.to_vec(),
            payload: None,
        };
        self.vectors
            .upsert(MEMORIES_COLLECTION, vec![point])
            .map_err(|e| {
                warn!(stage = "index", memory_id = id, error = %e, "store_memory failed");
                e
            })?;
        Ok(id)
    }

    /// Find memories whose embeddings are most similar to `vector`.
    ///
    /// Index entries whose ids do not parse as memory ids are foreign
    /// to this collection; they are dropped, never surfaced as errors.
    pub fn search(&self, vector: &[f32], limit: usize) -> EngramResult<Vec<MemoryMatch>> {
        let hits = self.vectors.query(MEMORIES_COLLECTION, vector, limit)?;
        let mut out = Vec::with_capacity(hits.len());
        for hit in hits {
            match hit.id.parse::<i64>() {
                Ok(memory_id) => out.push(MemoryMatch {
                    memory_id,
                    score: hit.score,
                }),
                Err(_) => trace!(id = %hit.id, "dropping foreign index id"),
            }
        }
        Ok(out)
    }

    /// Insert a node into the graph.
    pub fn create_entity(
        &self,
        label: &str,
        props: Option<serde_json::Value>,
    ) -> EngramResult<String> {
        self.graph.create_node(label, props)
    }

    /// Create a directed relationship between two entities.
    pub fn relate_entities(
        &self,
        from: &str,
        to: &str,
        edge_type: &str,
        props: Option<serde_json::Value>,
    ) -> EngramResult<String> {
        self.graph.create_edge(from, to, edge_type, props)
    }

    /// Fetch a memory record by id.
    pub fn get_memory(&self, id: i64) -> EngramResult<MemoryRecord> {
        self.records.get_memory(id)
    }
}
