// src/pipeline.rs
//! End-to-end graph construction: raw metrics in, positioned payload out.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{HealthmapError, Result};
use crate::graph::edges::{self, Dependencies};
use crate::graph::{assemble, grid, layout, LayoutConfig};
use crate::health::{classify, HealthConfig};
use crate::job::{AnalysisJob, JobStatus, ServiceGraph};
use crate::metrics::{self, EmergeReport, RawRecords};
use crate::types::{FileMetrics, GraphNode, GraphPayload};

/// Which placement strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Hierarchical,
    Grid,
}

#[derive(Debug, Clone, Default)]
pub struct GraphOptions {
    pub layout: LayoutMode,
    pub health: HealthConfig,
    pub spacing: LayoutConfig,
}

impl GraphOptions {
    #[must_use]
    pub fn from_config(config: &Config, layout: LayoutMode) -> Self {
        Self {
            layout,
            health: config.health.clone(),
            spacing: config.layout.clone(),
        }
    }
}

/// Classifies canonical metrics into unpositioned nodes.
#[must_use]
pub fn classify_all(metrics: Vec<FileMetrics>, config: &HealthConfig) -> Vec<GraphNode> {
    metrics
        .into_iter()
        .map(|m| {
            let health = classify(&m, config);
            GraphNode::new(m, health)
        })
        .collect()
}

/// Places nodes with the selected strategy.
#[must_use]
pub fn place(nodes: Vec<GraphNode>, options: &GraphOptions) -> Vec<GraphNode> {
    match options.layout {
        LayoutMode::Hierarchical => layout::apply_hierarchical(nodes, &options.spacing).nodes,
        LayoutMode::Grid => grid::apply_grid(nodes, &options.spacing),
    }
}

/// Normalizes, classifies, lays out, and assembles a graph.
///
/// # Errors
/// Returns `MalformedMetrics` for a bad record, `DuplicateNodeId` for a repeated
/// path, or `InvalidConfig` if the spacing would allow collisions.
pub fn build_graph(
    records: &RawRecords,
    dependencies: Option<&Dependencies>,
    options: &GraphOptions,
) -> Result<GraphPayload> {
    let metrics = metrics::normalize_all(records)?;
    build_from_metrics(metrics, dependencies, options)
}

/// Same as [`build_graph`] for already-normalized metrics.
///
/// # Errors
/// Returns `DuplicateNodeId` for a repeated path or `InvalidConfig` for bad spacing.
pub fn build_from_metrics(
    metrics: Vec<FileMetrics>,
    dependencies: Option<&Dependencies>,
    options: &GraphOptions,
) -> Result<GraphPayload> {
    options.spacing.validate()?;
    let nodes = classify_all(metrics, &options.health);
    let nodes = place(nodes, options);
    let edges = dependencies.map(edges::from_dependencies).unwrap_or_default();
    debug!(nodes = nodes.len(), edges = edges.len(), mode = ?options.layout, "assembling graph");
    assemble(nodes, edges)
}

/// Builds the graph for a completed job.
///
/// Per-file data comes from `graph_data` when the service sent it, otherwise
/// from `metrics`. Explicit `dependencies` win over `graph_data` edges.
///
/// # Errors
/// Returns `JobNotComplete` unless the job status is `Completed`, plus any
/// error from [`build_from_metrics`].
pub fn graph_from_job(job: &AnalysisJob, options: &GraphOptions) -> Result<GraphPayload> {
    if job.status != JobStatus::Completed {
        return Err(HealthmapError::JobNotComplete(job.status));
    }
    let files = job_metrics(job)?;
    let dependencies = job
        .dependencies
        .clone()
        .or_else(|| job.graph_data.as_ref().map(ServiceGraph::dependencies));
    info!(job_id = %job.id, files = files.len(), "building graph from job");
    build_from_metrics(files, dependencies.as_ref(), options)
}

fn job_metrics(job: &AnalysisJob) -> Result<Vec<FileMetrics>> {
    match (&job.graph_data, &job.metrics) {
        (Some(graph), _) => graph.file_metrics(),
        (None, Some(records)) => metrics::normalize_all(records),
        (None, None) => Ok(Vec::new()),
    }
}

/// Reads an Emerge JSON report from disk.
///
/// # Errors
/// Returns `Io` if the file is unreadable or `Json` if it is not a report.
pub fn load_report(path: &Path) -> Result<EmergeReport> {
    let content = fs::read_to_string(path).map_err(|source| HealthmapError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Reads a dependency map (`{"a.py": ["b.py"]}`) from disk.
///
/// # Errors
/// Returns `Io` if the file is unreadable or `Json` if it is malformed.
pub fn load_dependencies(path: &Path) -> Result<Dependencies> {
    let content = fs::read_to_string(path).map_err(|source| HealthmapError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(serde_json::from_str(&content)?)
}
