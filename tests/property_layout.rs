// tests/property_layout.rs
//! Property checks for both placement strategies.

use healthmap_core::graph::grid::apply_grid;
use healthmap_core::graph::{apply_hierarchical, LayoutConfig};
use healthmap_core::health::HealthLabel;
use healthmap_core::{FileMetrics, GraphNode, Position};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn paths() -> impl Strategy<Value = BTreeSet<String>> {
    let segment = prop::sample::select(vec!["src", "lib", "core", "util", "a", "b"]);
    let file = "[a-e]{1,3}\\.(rs|py|ts)";
    let path = (prop::collection::vec(segment, 0..4), file).prop_map(|(dirs, name)| {
        let mut parts: Vec<String> = dirs.into_iter().map(str::to_string).collect();
        parts.push(name);
        parts.join("/")
    });
    prop::collection::btree_set(path, 0..40)
}

fn nodes(paths: &BTreeSet<String>) -> Vec<GraphNode> {
    paths
        .iter()
        .map(|p| GraphNode::new(FileMetrics::new(p.as_str(), 1, 1), HealthLabel::Green))
        .collect()
}

fn spots(nodes: &[GraphNode]) -> Vec<(String, Position)> {
    let mut v: Vec<_> = nodes.iter().map(|n| (n.id.clone(), n.position)).collect();
    v.sort_by(|a, b| a.0.cmp(&b.0));
    v
}

fn distinct(nodes: &[GraphNode]) -> bool {
    let set: HashSet<_> = nodes
        .iter()
        .map(|n| (n.position.x.to_bits(), n.position.y.to_bits()))
        .collect();
    set.len() == nodes.len()
}

/// True when `id` lives in a strict subfolder of the folder named by `prefix`.
fn in_subfolder(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix).is_some_and(|rest| rest.contains('/'))
}

proptest! {
    #[test]
    fn hierarchical_is_order_independent(paths in paths()) {
        let config = LayoutConfig::default();
        let forward = apply_hierarchical(nodes(&paths), &config);
        let mut reversed = nodes(&paths);
        reversed.reverse();
        let backward = apply_hierarchical(reversed, &config);
        prop_assert_eq!(spots(&forward.nodes), spots(&backward.nodes));
    }

    #[test]
    fn hierarchical_never_collides(paths in paths()) {
        let l = apply_hierarchical(nodes(&paths), &LayoutConfig::default());
        prop_assert_eq!(l.nodes.len(), paths.len());
        prop_assert!(distinct(&l.nodes));
    }

    #[test]
    fn descendant_files_never_left_of_ancestor_files(paths in paths()) {
        let l = apply_hierarchical(nodes(&paths), &LayoutConfig::default());
        for a in &l.nodes {
            let prefix = a.id.rsplit_once('/').map_or(String::new(), |(dir, _)| format!("{dir}/"));
            for b in l.nodes.iter().filter(|b| in_subfolder(&b.id, &prefix)) {
                prop_assert!(b.position.x >= a.position.x, "{} left of {}", b.id, a.id);
            }
        }
    }

    #[test]
    fn grid_never_collides(paths in paths(), columns in prop::option::of(1usize..6)) {
        let config = LayoutConfig { grid_columns: columns, ..LayoutConfig::default() };
        let placed = apply_grid(nodes(&paths), &config);
        prop_assert_eq!(placed.len(), paths.len());
        prop_assert!(distinct(&placed));
    }

    #[test]
    fn grid_is_order_independent(paths in paths()) {
        let config = LayoutConfig::default();
        let forward = apply_grid(nodes(&paths), &config);
        let mut reversed = nodes(&paths);
        reversed.reverse();
        let backward = apply_grid(reversed, &config);
        prop_assert_eq!(spots(&forward), spots(&backward));
    }
}
