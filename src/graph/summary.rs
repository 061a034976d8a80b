// src/graph/summary.rs
//! Aggregate statistics over a node set.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::health::HealthLabel;
use crate::types::GraphNode;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSummary {
    pub total_files: usize,
    pub total_loc: u64,
    pub total_methods: u64,
    pub avg_methods_per_file: f64,
    pub avg_loc_per_file: f64,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    pub languages: BTreeMap<String, usize>,
    pub primary_language: Option<String>,
}

impl GraphSummary {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_nodes(nodes: &[GraphNode]) -> Self {
        let mut s = Self {
            total_files: nodes.len(),
            ..Self::default()
        };
        for node in nodes {
            s.total_loc += node.metrics.line_count;
            s.total_methods += node.metrics.method_count;
            match node.health {
                HealthLabel::Green => s.green += 1,
                HealthLabel::Yellow => s.yellow += 1,
                HealthLabel::Red => s.red += 1,
            }
            *s.languages.entry(node.language.clone()).or_default() += 1;
        }
        if s.total_files > 0 {
            s.avg_methods_per_file = s.total_methods as f64 / s.total_files as f64;
            s.avg_loc_per_file = s.total_loc as f64 / s.total_files as f64;
        }
        s.primary_language = primary(&s.languages);
        s
    }

    #[must_use]
    pub fn count(&self, label: HealthLabel) -> usize {
        match label {
            HealthLabel::Green => self.green,
            HealthLabel::Yellow => self.yellow,
            HealthLabel::Red => self.red,
        }
    }
}

// BTreeMap iterates in name order, so keeping the first maximum breaks ties by name.
fn primary(languages: &BTreeMap<String, usize>) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;
    for (lang, &count) in languages {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((lang, count));
        }
    }
    best.map(|(lang, _)| lang.clone())
}
