// src/graph/grid.rs
//! Flat grid placement for when folder-aware layout is not requested.

use super::layout::LayoutConfig;
use crate::types::{GraphNode, Position};

/// Columns used for `n` nodes: the configured count, else `ceil(sqrt(n))`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn row_width(n: usize, config: &LayoutConfig) -> usize {
    if let Some(cols) = config.grid_columns {
        return cols.max(1);
    }
    ((n as f64).sqrt().ceil() as usize).max(1)
}

/// Position of the `index`-th node in a grid `row_width` columns wide.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn position(index: usize, row_width: usize, config: &LayoutConfig) -> Position {
    let width = row_width.max(1);
    Position::new(
        (index % width) as f64 * config.grid_spacing_x,
        (index / width) as f64 * config.grid_spacing_y,
    )
}

/// Places nodes on the grid in id order.
#[must_use]
pub fn apply_grid(mut nodes: Vec<GraphNode>, config: &LayoutConfig) -> Vec<GraphNode> {
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    let width = row_width(nodes.len(), config);
    for (idx, node) in nodes.iter_mut().enumerate() {
        node.position = position(idx, width, config);
    }
    nodes
}
