//! In-memory property graph: nodes, typed directed edges, and
//! single-hop neighbor queries.
//!
//! Node and edge ids come from one shared counter, so an id is unique
//! process-wide across both kinds: `"n1"`, `"e2"`, `"n3"`, ...

use engram_core::{Edge, EngramResult, GraphBackend, Node};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    nodes: FxHashMap<String, Node>,
    edges: Vec<Edge>,
    next_id: u64,
}

/// Adjacency store guarded by a single reader/writer lock.
///
/// Edges live in an append-only list so neighbor queries observe
/// edge-insertion order. Edge endpoints are not validated at creation;
/// `neighbors` skips edges whose target node was never created.
#[derive(Debug, Default)]
pub struct GraphStore {
    inner: RwLock<Inner>,
}

impl GraphStore {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes currently stored.
    pub fn node_count(&self) -> usize {
        self.inner.read().nodes.len()
    }

    /// Number of edges currently stored.
    pub fn edge_count(&self) -> usize {
        self.inner.read().edges.len()
    }
}

impl GraphBackend for GraphStore {
    fn create_node(&self, label: &str, props: Option<serde_json::Value>) -> EngramResult<String> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = format!("n{}", inner.next_id);
        inner.nodes.insert(
            id.clone(),
            Node {
                id: id.clone(),
                label: label.to_string(),
                props,
            },
        );
        debug!(%id, label, "node created");
        Ok(id)
    }

    fn create_edge(
        &self,
        from: &str,
        to: &str,
        edge_type: &str,
        props: Option<serde_json::Value>,
    ) -> EngramResult<String> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = format!("e{}", inner.next_id);
        inner.edges.push(Edge {
            id: id.clone(),
            from: from.to_string(),
            to: to.to_string(),
            edge_type: edge_type.to_string(),
            props,
        });
        debug!(%id, from, to, edge_type, "edge created");
        Ok(id)
    }

    fn neighbors(&self, node_id: &str, edge_type: &str) -> EngramResult<Vec<Node>> {
        let inner = self.inner.read();
        let mut out = Vec::new();
        for edge in &inner.edges {
            if edge.edge_type != edge_type || edge.from != node_id {
                continue;
            }
            // Dangling targets are skipped, not reported
            if let Some(node) = inner.nodes.get(&edge.to) {
                out.push(node.clone());
            }
        }
        Ok(out)
    }
}
