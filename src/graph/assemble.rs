// src/graph/assemble.rs
//! Final graph payload assembly.

use std::collections::HashSet;
use tracing::warn;

use crate::error::{HealthmapError, Result};
use crate::types::{GraphEdge, GraphNode, GraphPayload};

/// Combines positioned nodes and edges into a payload.
///
/// # Errors
/// Returns `DuplicateNodeId` if two nodes share an id. No partial graph is returned.
pub fn assemble(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Result<GraphPayload> {
    let ids = unique_ids(&nodes)?;
    let dangling = edges
        .iter()
        .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
        .count();
    drop(ids);

    if dangling > 0 {
        warn!(dangling, total = edges.len(), "edges reference nodes outside the graph");
    }

    Ok(GraphPayload { nodes, edges })
}

fn unique_ids(nodes: &[GraphNode]) -> Result<HashSet<&str>> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(HealthmapError::DuplicateNodeId(node.id.clone()));
        }
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edges::import_edge;
    use crate::health::HealthLabel;
    use crate::types::FileMetrics;

    fn node(path: &str) -> GraphNode {
        GraphNode::new(FileMetrics::new(path, 0, 0), HealthLabel::Green)
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = assemble(vec![node("a.py"), node("b.py"), node("a.py")], Vec::new());
        assert!(matches!(err, Err(HealthmapError::DuplicateNodeId(id)) if id == "a.py"));
    }

    #[test]
    fn test_empty_round_trip() {
        let g = assemble(Vec::new(), Vec::new()).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_edges_pass_through() {
        let g = assemble(
            vec![node("a.py"), node("b.py")],
            vec![import_edge("a.py", "b.py"), import_edge("a.py", "gone.py")],
        )
        .unwrap();
        assert_eq!(g.edges.len(), 2);
        assert_eq!(g.nodes.len(), 2);
    }
}
