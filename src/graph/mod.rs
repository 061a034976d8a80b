// src/graph/mod.rs
//! Graph construction: folder tree, layout strategies, and payload assembly.

pub mod assemble;
pub mod edges;
pub mod grid;
pub mod lang;
pub mod layout;
pub mod summary;
pub mod tree;

pub use assemble::assemble;
pub use layout::{apply_hierarchical, FolderPlacement, Layout, LayoutConfig};
pub use summary::GraphSummary;
pub use tree::FolderNode;
