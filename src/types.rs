// src/types.rs
use serde::{Deserialize, Serialize};

use crate::health::HealthLabel;

/// Canonical per-file metrics, identified by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetrics {
    pub path: String,
    pub method_count: u64,
    pub line_count: u64,
}

impl FileMetrics {
    #[must_use]
    pub fn new(path: impl Into<String>, method_count: u64, line_count: u64) -> Self {
        Self {
            path: path.into(),
            method_count,
            line_count,
        }
    }
}

/// A point on the rendering canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One file in the rendered graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub display_name: String,
    pub metrics: FileMetrics,
    pub health: HealthLabel,
    pub language: String,
    pub position: Position,
}

impl GraphNode {
    /// Creates an unpositioned node. The id is the metrics path.
    #[must_use]
    pub fn new(metrics: FileMetrics, health: HealthLabel) -> Self {
        let display_name = file_name(&metrics.path).to_string();
        let language = crate::graph::lang::detect(&display_name).to_string();
        Self {
            id: metrics.path.clone(),
            display_name,
            metrics,
            health,
            language,
            position: Position::default(),
        }
    }

    /// Returns a copy of this node placed at `position`.
    #[must_use]
    pub fn placed_at(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

/// A directed relation between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: String,
}

/// The graph handed to the rendering surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphPayload {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Splits a path on `/` or `\`, dropping empty segments.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty())
}

/// Final path segment, or the whole path when it has none.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path_segments(path).last().unwrap_or(path)
}
