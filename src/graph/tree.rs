// src/graph/tree.rs
//! Folder hierarchy reconstructed from file paths.

use crate::types::{path_segments, GraphNode};

/// A folder and everything directly inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderNode {
    /// Slash-joined folder path. Empty for the root.
    pub path: String,
    /// Depth below the root (root = 0).
    pub level: usize,
    pub children: Vec<FolderNode>,
    pub files: Vec<GraphNode>,
}

impl FolderNode {
    #[must_use]
    pub fn root() -> Self {
        Self::new(String::new(), 0)
    }

    fn new(path: String, level: usize) -> Self {
        Self {
            path,
            level,
            children: Vec::new(),
            files: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.level == 0
    }

    /// Total number of files at or below this folder.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len() + self.children.iter().map(Self::file_count).sum::<usize>()
    }

    /// Paths of this folder and all descendants, depth-first.
    #[must_use]
    pub fn folder_paths(&self) -> Vec<String> {
        let mut out = vec![self.path.clone()];
        for child in &self.children {
            out.extend(child.folder_paths());
        }
        out
    }

    /// Finds a folder at or below this one by path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&FolderNode> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(path))
    }

    /// Sorts children by path and files by display name (ties by id), recursively.
    pub fn sort_recursive(&mut self) {
        self.sort_local();
        for child in &mut self.children {
            child.sort_recursive();
        }
    }

    pub(crate) fn sort_local(&mut self) {
        self.children.sort_by(|a, b| a.path.cmp(&b.path));
        self.files.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    fn child_index(&mut self, path: &str, level: usize) -> usize {
        if let Some(idx) = self.children.iter().position(|c| c.path == path) {
            return idx;
        }
        self.children.push(Self::new(path.to_string(), level));
        self.children.len() - 1
    }
}

/// Builds the folder tree. Each file lands in the folder named by its path minus the file name.
#[must_use]
pub fn build(nodes: impl IntoIterator<Item = GraphNode>) -> FolderNode {
    let mut root = FolderNode::root();
    for node in nodes {
        insert(&mut root, node);
    }
    root
}

fn insert(root: &mut FolderNode, node: GraphNode) {
    let segments: Vec<String> = path_segments(&node.id).map(str::to_string).collect();
    let dirs = segments.len().saturating_sub(1);

    let mut current = root;
    let mut prefix = String::new();
    for (depth, segment) in segments.iter().take(dirs).enumerate() {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);
        let idx = current.child_index(&prefix, depth + 1);
        current = &mut current.children[idx];
    }
    current.files.push(node);
}
