// src/graph/edges.rs
//! Dependency edges for sources that report file-to-file relations.

use std::collections::BTreeMap;

use crate::types::GraphEdge;

pub const IMPORTS: &str = "imports";

/// Dependency map: source path -> target paths.
pub type Dependencies = BTreeMap<String, Vec<String>>;

#[must_use]
pub fn edge_id(source: &str, target: &str) -> String {
    format!("{source}___{target}")
}

#[must_use]
pub fn import_edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        id: edge_id(source, target),
        source: source.to_string(),
        target: target.to_string(),
        kind: IMPORTS.to_string(),
    }
}

/// Expands a dependency map into edges, sources in path order, targets as listed.
#[must_use]
pub fn from_dependencies(deps: &Dependencies) -> Vec<GraphEdge> {
    deps.iter()
        .flat_map(|(source, targets)| targets.iter().map(move |t| import_edge(source, t)))
        .collect()
}
