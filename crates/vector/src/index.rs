//! Linear-scan vector index over named collections.

use dashmap::DashMap;
use engram_core::{EngramError, EngramResult, QueryMatch, VectorBackend, VectorPoint};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::distance::cosine_similarity;

/// One named collection: insertion-ordered points plus an id lookup.
///
/// Dimensionality is fixed by the first point ever inserted; every
/// later point and every query vector must match it.
#[derive(Debug, Default)]
struct Collection {
    dim: usize,
    points: Vec<VectorPoint>,
    by_id: FxHashMap<String, usize>,
}

impl Collection {
    /// Check a whole batch against this collection's dimensionality
    /// before anything is applied. For a collection that is still empty
    /// the first point of the batch sets the expected dimension.
    fn validate_batch(&self, points: &[VectorPoint]) -> EngramResult<usize> {
        let expected = if self.points.is_empty() {
            points[0].vector.len()
        } else {
            self.dim
        };
        for point in points {
            if point.vector.len() != expected {
                return Err(EngramError::validation(format!(
                    "vector dimension mismatch for point {}: expected {expected}, got {}",
                    point.id,
                    point.vector.len()
                )));
            }
        }
        Ok(expected)
    }

    fn apply(&mut self, points: Vec<VectorPoint>) {
        for point in points {
            match self.by_id.get(&point.id) {
                Some(&slot) => self.points[slot] = point,
                None => {
                    self.by_id.insert(point.id.clone(), self.points.len());
                    self.points.push(point);
                }
            }
        }
    }
}

/// In-memory vector index partitioned into named collections.
///
/// The collection map is sharded (DashMap), so operations on different
/// collections never contend; within one collection, upserts take that
/// shard's write lock and queries its read lock.
#[derive(Debug, Default)]
pub struct VectorIndex {
    collections: DashMap<String, Collection>,
}

impl VectorIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points in a collection, 0 when it does not exist.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|c| c.points.len())
            .unwrap_or(0)
    }

    /// True when the collection holds no points.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl VectorBackend for VectorIndex {
    fn upsert(&self, collection: &str, points: Vec<VectorPoint>) -> EngramResult<()> {
        if points.is_empty() {
            return Ok(());
        }
        let mut entry = self.collections.entry(collection.to_string()).or_default();
        let dim = entry.validate_batch(&points)?;
        entry.dim = dim;
        let count = points.len();
        entry.apply(points);
        debug!(collection, count, total = entry.points.len(), "points upserted");
        Ok(())
    }

    fn query(
        &self,
        collection: &str,
        vector: &[f32],
        limit: usize,
    ) -> EngramResult<Vec<QueryMatch>> {
        let coll = match self.collections.get(collection) {
            Some(coll) => coll,
            None => return Ok(Vec::new()),
        };
        if coll.points.is_empty() {
            return Ok(Vec::new());
        }
        if vector.len() != coll.dim {
            return Err(EngramError::validation(format!(
                "query dimension mismatch: collection {collection} holds {}-dimensional vectors, got {}",
                coll.dim,
                vector.len()
            )));
        }

        // Score in insertion order; the stable sort then keeps earlier
        // entries ahead of later ones on equal scores.
        let mut matches: Vec<QueryMatch> = coll
            .points
            .iter()
            .map(|p| QueryMatch {
                id: p.id.clone(),
                score: cosine_similarity(vector, &p.vector),
            })
            .collect();
        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(limit);
        Ok(matches)
    }
}
