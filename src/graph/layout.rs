// src/graph/layout.rs
//! Folder-aware hierarchical layout.
//!
//! Files of a folder are placed in a fixed-width grid at the folder's cursor.
//! Subfolders follow below, indented to the right, each one starting after
//! the full vertical extent of the previous sibling. The indent is at least
//! the width of a full file row, so a descendant's files never sit left of
//! an ancestor's files.

use serde::{Deserialize, Serialize};

use super::tree::{self, FolderNode};
use crate::error::{HealthmapError, Result};
use crate::types::{GraphNode, Position};

/// Spacing and grid parameters shared by both layout strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub file_spacing_x: f64,
    pub file_spacing_y: f64,
    pub folder_indent: f64,
    pub files_per_row: usize,
    /// Gap between a folder's file block and its first subfolder.
    pub block_gap: f64,
    /// Gap between consecutive sibling folders.
    pub sibling_gap: f64,
    pub origin_x: f64,
    pub origin_y: f64,
    pub grid_spacing_x: f64,
    pub grid_spacing_y: f64,
    /// Fixed column count for the flat grid. `None` means `ceil(sqrt(n))`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_columns: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            file_spacing_x: 300.0,
            file_spacing_y: 100.0,
            folder_indent: 900.0,
            files_per_row: 3,
            block_gap: 50.0,
            sibling_gap: 100.0,
            origin_x: 50.0,
            origin_y: 50.0,
            grid_spacing_x: 250.0,
            grid_spacing_y: 150.0,
            grid_columns: None,
        }
    }
}

impl LayoutConfig {
    /// Rejects settings that could place two files on the same spot or a
    /// subfolder's files left of its parent's.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            if !value.is_finite() {
                return Err(HealthmapError::InvalidConfig(format!(
                    "layout.{name} must be finite (got {value})"
                )));
            }
        }
        let positive = [
            ("file_spacing_x", self.file_spacing_x),
            ("file_spacing_y", self.file_spacing_y),
            ("grid_spacing_x", self.grid_spacing_x),
            ("grid_spacing_y", self.grid_spacing_y),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(HealthmapError::InvalidConfig(format!(
                    "layout.{name} must be positive (got {value})"
                )));
            }
        }
        let non_negative = [
            ("folder_indent", self.folder_indent),
            ("block_gap", self.block_gap),
            ("sibling_gap", self.sibling_gap),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(HealthmapError::InvalidConfig(format!(
                    "layout.{name} must not be negative (got {value})"
                )));
            }
        }
        if self.files_per_row == 0 {
            return Err(HealthmapError::InvalidConfig(
                "layout.files_per_row must be at least 1".into(),
            ));
        }
        let row_width = self.min_folder_indent();
        if self.folder_indent < row_width {
            return Err(HealthmapError::InvalidConfig(format!(
                "layout.folder_indent ({}) must be at least {row_width} for {} files per row",
                self.folder_indent, self.files_per_row
            )));
        }
        if self.grid_columns == Some(0) {
            return Err(HealthmapError::InvalidConfig(
                "layout.grid_columns must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Offset of the last file column in a folder's block.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn min_folder_indent(&self) -> f64 {
        self.files_per_row.saturating_sub(1) as f64 * self.file_spacing_x
    }

    #[must_use]
    pub fn origin(&self) -> Position {
        Position::new(self.origin_x, self.origin_y)
    }
}

/// Where a folder's block was anchored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderPlacement {
    pub path: String,
    pub level: usize,
    pub origin: Position,
}

/// Output of a hierarchical layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// Files in visit order: a folder's own files, then each subfolder.
    pub nodes: Vec<GraphNode>,
    pub folders: Vec<FolderPlacement>,
    /// Vertical space consumed from the start cursor.
    pub extent: f64,
}

impl Layout {
    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.nodes.iter().find(|n| n.id == id).map(|n| n.position)
    }

    #[must_use]
    pub fn folder(&self, path: &str) -> Option<&FolderPlacement> {
        self.folders.iter().find(|f| f.path == path)
    }
}

/// Lays out a folder tree starting at `start`.
#[must_use]
pub fn layout(tree: FolderNode, start: Position, config: &LayoutConfig) -> Layout {
    let mut out = Layout::default();
    let next_y = place(tree, start.x, start.y, config, &mut out);
    out.extent = next_y - start.y;
    out
}

/// Builds the folder tree for `nodes` and lays it out at the configured origin.
#[must_use]
pub fn apply_hierarchical(nodes: Vec<GraphNode>, config: &LayoutConfig) -> Layout {
    if nodes.is_empty() {
        return Layout::default();
    }
    layout(tree::build(nodes), config.origin(), config)
}

#[allow(clippy::cast_precision_loss)]
fn place(mut folder: FolderNode, x: f64, y: f64, config: &LayoutConfig, out: &mut Layout) -> f64 {
    folder.sort_local();
    out.folders.push(FolderPlacement {
        path: folder.path.clone(),
        level: folder.level,
        origin: Position::new(x, y),
    });

    let per_row = config.files_per_row.max(1);
    let file_count = folder.files.len();
    for (idx, file) in folder.files.into_iter().enumerate() {
        let row = (idx / per_row) as f64;
        let col = (idx % per_row) as f64;
        out.nodes.push(GraphNode {
            position: Position::new(
                x + col * config.file_spacing_x,
                y + row * config.file_spacing_y,
            ),
            ..file
        });
    }

    let mut cursor = y;
    if file_count > 0 {
        let rows = (file_count + per_row - 1) / per_row;
        cursor += rows as f64 * config.file_spacing_y + config.block_gap;
    }

    for child in folder.children {
        let child_end = place(child, x + config.folder_indent, cursor, config, out);
        cursor = child_end + config.sibling_gap;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthLabel;
    use crate::types::FileMetrics;

    fn node(path: &str) -> GraphNode {
        GraphNode::new(FileMetrics::new(path, 0, 0), HealthLabel::Green)
    }

    #[test]
    fn test_three_files_per_row() {
        let config = LayoutConfig::default();
        let nodes = ["d.py", "a.py", "c.py", "b.py"].map(node).to_vec();
        let l = apply_hierarchical(nodes, &config);
        assert_eq!(l.position_of("a.py"), Some(Position::new(50.0, 50.0)));
        assert_eq!(l.position_of("b.py"), Some(Position::new(350.0, 50.0)));
        assert_eq!(l.position_of("c.py"), Some(Position::new(650.0, 50.0)));
        assert_eq!(l.position_of("d.py"), Some(Position::new(50.0, 150.0)));
        // two rows of files plus the block gap
        assert!((l.extent - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_subfolder_indented_below_files() {
        let config = LayoutConfig::default();
        let l = apply_hierarchical(vec![node("top.py"), node("pkg/inner.py")], &config);
        assert_eq!(l.position_of("top.py"), Some(Position::new(50.0, 50.0)));
        assert_eq!(l.position_of("pkg/inner.py"), Some(Position::new(950.0, 200.0)));
    }

    #[test]
    fn test_empty_folder_does_not_advance_cursor() {
        let config = LayoutConfig::default();
        let l = apply_hierarchical(vec![node("a/b/c.py")], &config);
        // root and `a` hold no files, so only indentation moves
        assert_eq!(l.position_of("a/b/c.py"), Some(Position::new(1850.0, 50.0)));
        assert_eq!(l.folder("a").map(|f| f.origin), Some(Position::new(950.0, 50.0)));
    }

    #[test]
    fn test_siblings_stack_with_gap() {
        let config = LayoutConfig::default();
        let l = apply_hierarchical(vec![node("x/1.py"), node("y/2.py")], &config);
        // x: files at 50, block ends at 200, folder ends at 200, next sibling at 300
        assert_eq!(l.position_of("x/1.py"), Some(Position::new(950.0, 50.0)));
        assert_eq!(l.position_of("y/2.py"), Some(Position::new(950.0, 300.0)));
    }

    #[test]
    fn test_empty_input() {
        let l = apply_hierarchical(Vec::new(), &LayoutConfig::default());
        assert!(l.nodes.is_empty());
        assert!(l.folders.is_empty());
        assert!(l.extent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_degenerate_spacing() {
        let zero_y = LayoutConfig { file_spacing_y: 0.0, ..LayoutConfig::default() };
        assert!(zero_y.validate().is_err());
        let zero_row = LayoutConfig { files_per_row: 0, ..LayoutConfig::default() };
        assert!(zero_row.validate().is_err());
        let nan_x = LayoutConfig { file_spacing_x: f64::NAN, ..LayoutConfig::default() };
        assert!(nan_x.validate().is_err());
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_indent_narrower_than_row() {
        let narrow = LayoutConfig { folder_indent: 250.0, ..LayoutConfig::default() };
        assert!(matches!(narrow.validate(), Err(HealthmapError::InvalidConfig(_))));
        // exactly the last column's offset is allowed
        let tight = LayoutConfig { folder_indent: 600.0, ..LayoutConfig::default() };
        assert!(tight.validate().is_ok());
        let single = LayoutConfig { files_per_row: 1, folder_indent: 0.0, ..LayoutConfig::default() };
        assert!(single.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_origin() {
        let nan = LayoutConfig { origin_x: f64::NAN, ..LayoutConfig::default() };
        assert!(matches!(nan.validate(), Err(HealthmapError::InvalidConfig(_))));
        let inf = LayoutConfig { origin_y: f64::INFINITY, ..LayoutConfig::default() };
        assert!(matches!(inf.validate(), Err(HealthmapError::InvalidConfig(_))));
    }

    #[test]
    fn test_subfolder_files_right_of_full_parent_row() {
        let config = LayoutConfig::default();
        let nodes = ["src/a.py", "src/b.py", "src/c.py", "src/utils/d.py"].map(node).to_vec();
        let l = apply_hierarchical(nodes, &config);
        let c = l.position_of("src/c.py").unwrap();
        let d = l.position_of("src/utils/d.py").unwrap();
        assert!(d.x >= c.x, "d.x={} c.x={}", d.x, c.x);
    }
}
