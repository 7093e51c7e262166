//! End-to-end tests for the memory pipeline: store, search, fetch,
//! relate — and the documented non-atomicity of `store_memory`.

use std::sync::Arc;

use engram::{
    Coordinator, EngramError, EngramResult, GraphBackend, GraphStore, QueryMatch, RecordStore,
    VectorBackend, VectorIndex, VectorPoint, MEMORIES_COLLECTION,
};

/// Test: store → search → get round-trips a memory through all stores
#[test]
fn test_store_search_get_roundtrip() {
    let coordinator = Coordinator::new(RecordStore::new(), VectorIndex::new(), GraphStore::new());

    let id = coordinator.store_memory(1, "hi", &[1.0, 2.0]).unwrap();
    assert_eq!(id, 1);

    let hits = coordinator.search(&[1.0, 2.0], 1).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].memory_id, 1);
    assert!((hits[0].score - 1.0).abs() < 1e-6);

    let memory = coordinator.get_memory(1).unwrap();
    assert_eq!(memory.id, 1);
    assert_eq!(memory.user_id, 1);
    assert_eq!(memory.content, "hi");
}

/// Test: search ranks a closer memory above a farther one
#[test]
fn test_search_ranks_by_similarity() {
    let coordinator = Coordinator::new(RecordStore::new(), VectorIndex::new(), GraphStore::new());

    let east = coordinator.store_memory(1, "east", &[1.0, 0.0]).unwrap();
    let north = coordinator.store_memory(1, "north", &[0.0, 1.0]).unwrap();
    let northeast = coordinator.store_memory(1, "northeast", &[1.0, 1.0]).unwrap();

    let hits = coordinator.search(&[1.0, 0.1], 3).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].memory_id, east);
    assert_eq!(hits[1].memory_id, northeast);
    assert_eq!(hits[2].memory_id, north);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

/// Test: foreign ids in the memories collection are filtered, not errors
#[test]
fn test_search_drops_foreign_index_ids() {
    let index = Arc::new(VectorIndex::new());
    index
        .upsert(
            MEMORIES_COLLECTION,
            vec![VectorPoint {
                id: "legacy-point".to_string(),
                vector: vec![1.0, 2.0],
                payload: None,
            }],
        )
        .unwrap();

    let coordinator = Coordinator::new(RecordStore::new(), Arc::clone(&index), GraphStore::new());
    let id = coordinator.store_memory(1, "hi", &[1.0, 2.0]).unwrap();

    let hits = coordinator.search(&[1.0, 2.0], 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].memory_id, id);
}

/// Vector backend that always refuses upserts, standing in for a
/// broken vector-search service.
struct BrokenIndex;

impl VectorBackend for BrokenIndex {
    fn upsert(&self, _collection: &str, _points: Vec<VectorPoint>) -> EngramResult<()> {
        Err(EngramError::backend_with_source(
            "vector service unavailable",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        ))
    }

    fn query(
        &self,
        _collection: &str,
        _vector: &[f32],
        _limit: usize,
    ) -> EngramResult<Vec<QueryMatch>> {
        Ok(Vec::new())
    }
}

/// Test: an index failure surfaces, yet the record written in step one
/// stays readable (no rollback)
#[test]
fn test_index_failure_leaves_record_readable() {
    let records = Arc::new(RecordStore::new());
    let coordinator = Coordinator::new(Arc::clone(&records), BrokenIndex, GraphStore::new());

    let err = coordinator.store_memory(1, "survives", &[0.5, 0.5]).unwrap_err();
    assert!(matches!(err, EngramError::Backend { .. }));

    // The saga has no compensation: record and embedding remain
    let memory = coordinator.get_memory(1).unwrap();
    assert_eq!(memory.content, "survives");
    assert_eq!(records.embedding_count(), 1);

    // And the search side never saw the memory
    assert!(coordinator.search(&[0.5, 0.5], 10).unwrap().is_empty());
}

/// Test: entity and relation calls land in the graph store
#[test]
fn test_relate_entities_and_neighbors() {
    let graph = Arc::new(GraphStore::new());
    let coordinator = Coordinator::new(RecordStore::new(), VectorIndex::new(), Arc::clone(&graph));

    let alice = coordinator
        .create_entity("Person", Some(serde_json::json!({"name": "Alice"})))
        .unwrap();
    let bob = coordinator.create_entity("Person", None).unwrap();
    let edge = coordinator
        .relate_entities(&alice, &bob, "KNOWS", None)
        .unwrap();
    assert!(edge.starts_with('e'));

    let known = graph.neighbors(&alice, "KNOWS").unwrap();
    assert_eq!(known.len(), 1);
    assert_eq!(known[0].id, bob);

    assert!(graph.neighbors(&alice, "EMPLOYS").unwrap().is_empty());
    assert!(graph.neighbors(&bob, "KNOWS").unwrap().is_empty());
}

/// Test: get_memory on an id never handed out fails with not-found
#[test]
fn test_get_memory_unknown_id() {
    let coordinator = Coordinator::new(RecordStore::new(), VectorIndex::new(), GraphStore::new());
    coordinator.store_memory(1, "one", &[1.0]).unwrap();

    let err = coordinator.get_memory(99).unwrap_err();
    assert!(matches!(err, EngramError::NotFound { .. }));
}

/// Test: a query whose dimensionality disagrees with the stored
/// memories is a validation error, not an empty result
#[test]
fn test_search_dimension_mismatch() {
    let coordinator = Coordinator::new(RecordStore::new(), VectorIndex::new(), GraphStore::new());
    coordinator.store_memory(1, "2d", &[1.0, 2.0]).unwrap();

    let err = coordinator.search(&[1.0, 2.0, 3.0], 1).unwrap_err();
    assert!(matches!(err, EngramError::Validation { .. }));
}
