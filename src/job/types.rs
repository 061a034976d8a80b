// src/job/types.rs
//! Wire types of the remote analysis service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::Result;
use crate::graph::edges::Dependencies;
use crate::metrics::{self, RawRecords};
use crate::types::FileMetrics;

/// Lifecycle of a remote analysis: `Pending -> Processing -> Completed | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status snapshot of an analysis job. Owned by the service; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisJob {
    pub id: String,
    pub status: JobStatus,
    /// Per-file raw metrics keyed by path. The service may instead put
    /// repository-wide aggregates here and the per-file data in `graph_data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RawRecords>,
    /// Per-file graph the service builds for a completed job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_data: Option<ServiceGraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Dependencies>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl AnalysisJob {
    /// A bare snapshot with only id and status set.
    #[must_use]
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            metrics: None,
            graph_data: None,
            dependencies: None,
            error_message: None,
            repository_name: None,
            github_url: None,
        }
    }
}

/// Graph document stored on a completed job: `{ nodes: [...], edges: [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceGraph {
    #[serde(default)]
    pub nodes: Vec<ServiceNode>,
    #[serde(default)]
    pub edges: Vec<ServiceEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceNode {
    pub id: String,
    /// `{ path, methods, loc, ... }`. Kept raw so bad counts surface as `MalformedMetrics`.
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEdge {
    pub source: String,
    pub target: String,
}

impl ServiceNode {
    /// The node's file path: `data.path`, falling back to the id.
    #[must_use]
    pub fn path(&self) -> &str {
        self.data
            .get("path")
            .and_then(Value::as_str)
            .unwrap_or(self.id.as_str())
    }
}

impl ServiceGraph {
    /// Canonical metrics for every node, in node order.
    ///
    /// # Errors
    /// Returns `MalformedMetrics` for the first node with bad counts.
    pub fn file_metrics(&self) -> Result<Vec<FileMetrics>> {
        self.nodes
            .iter()
            .map(|n| metrics::normalize_node_data(n.path(), &n.data))
            .collect()
    }

    /// Folds the edge list back into a dependency map.
    #[must_use]
    pub fn dependencies(&self) -> Dependencies {
        let mut deps = Dependencies::new();
        for edge in &self.edges {
            deps.entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
        }
        deps
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_duplicates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detect_dead_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub github_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AnalyzeOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: String,
    pub status: String,
    /// Estimated completion time in seconds.
    pub estimated_time: u64,
    #[serde(default)]
    pub message: String,
}
