//! Model types shared across the record, vector and graph stores.
//!
//! Every entity here is append-only: created once, never mutated or
//! deleted by this core. Free-form property bags are represented as
//! `Option<serde_json::Value>`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored memory record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Sequential id, starting at 1.
    pub id: i64,
    /// Owner of the memory.
    pub user_id: i64,
    /// The memory text itself.
    pub content: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// The embedding associated with one memory record.
///
/// Associated by id only; there is no hard foreign-key constraint, the
/// record store checks the id exists at append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// The memory this embedding represents.
    pub memory_id: i64,
    /// Fixed-length numeric representation of the memory's content.
    pub vector: Vec<f32>,
}

/// A single vector entry within a named collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPoint {
    /// Caller-chosen id, unique within the collection.
    pub id: String,
    /// The vector; must match the collection's dimensionality.
    pub vector: Vec<f32>,
    /// Arbitrary payload carried alongside the vector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// A vector query hit: entry id plus similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryMatch {
    /// Id of the matching entry.
    pub id: String,
    /// Cosine similarity to the query vector, in `[-1, 1]`.
    pub score: f32,
}

/// A graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Store-generated id (`"n{counter}"`).
    pub id: String,
    /// Node label, e.g. `"Person"`.
    pub label: String,
    /// Arbitrary properties attached to this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// A directed, typed graph edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Store-generated id (`"e{counter}"`), drawn from the same counter
    /// as node ids.
    pub id: String,
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Free-form relationship label, e.g. `"KNOWS"`.
    pub edge_type: String,
    /// Arbitrary properties attached to this edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<serde_json::Value>,
}

/// A coordinator search hit, resolved back to a memory id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryMatch {
    /// Id of the matching memory record.
    pub memory_id: i64,
    /// Similarity score of the match, in `[-1, 1]`.
    pub score: f32,
}
