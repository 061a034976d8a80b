// src/cli/handlers.rs
//! Command handlers.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::graph::GraphSummary;
use crate::health::{label_for_score, score};
use crate::job::{self, AnalyzeOptions, AnalyzeRequest, HttpJobClient};
use crate::pipeline::{self, GraphOptions, LayoutMode};
use crate::reporting;
use crate::types::{FileMetrics, GraphPayload};

/// Loads the explicit config file if given, else `./healthmap.toml` or defaults.
///
/// # Errors
/// Returns error if an explicit config file is unreadable or invalid.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load_from(p).with_context(|| format!("loading {}", p.display())),
        None => {
            let config = Config::load();
            config.validate()?;
            Ok(config)
        }
    }
}

fn mode(flat: bool) -> LayoutMode {
    if flat {
        LayoutMode::Grid
    } else {
        LayoutMode::Hierarchical
    }
}

/// Builds a graph from an Emerge report.
///
/// # Errors
/// Returns error if the inputs are unreadable or the metrics are malformed.
pub fn handle_graph(
    config: &Config,
    report: &Path,
    flat: bool,
    deps: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let doc = pipeline::load_report(report)
        .with_context(|| format!("reading report {}", report.display()))?;
    let dependencies = deps.map(pipeline::load_dependencies).transpose()?;
    let options = GraphOptions::from_config(config, mode(flat));
    let graph = pipeline::build_graph(&doc.local_metrics, dependencies.as_ref(), &options)?;
    emit(&graph, out)
}

/// Prints the score and label for one set of metrics.
pub fn handle_classify(config: &Config, methods: u64, lines: u64) {
    let metrics = FileMetrics::new("<input>", methods, lines);
    let value = score(&metrics, &config.health);
    let label = label_for_score(value, &config.health);
    println!("{} (score {value})", reporting::paint(label).bold());
}

/// Queues an analysis and prints the job id.
///
/// # Errors
/// Returns error if the service is unreachable or rejects the request.
pub fn handle_submit(
    config: &Config,
    github_url: &str,
    max_files: Option<u32>,
    no_duplicates: bool,
    no_dead_code: bool,
) -> Result<()> {
    let client = HttpJobClient::new(&config.service.base_url);
    let request = AnalyzeRequest {
        github_url: github_url.to_string(),
        options: Some(AnalyzeOptions {
            detect_duplicates: Some(!no_duplicates),
            detect_dead_code: Some(!no_dead_code),
            max_files,
        }),
    };
    let response = client.submit(&request)?;
    eprintln!(
        "{} {} (about {}s)",
        "Queued".green().bold(),
        response.analysis_id,
        response.estimated_time
    );
    println!("{}", response.analysis_id);
    Ok(())
}

/// Polls a job to completion and emits its graph.
///
/// With `timeout_secs`, the poll loop is cancelled once the limit passes.
///
/// # Errors
/// Returns error if the job fails, the service is unreachable, the deadline
/// passes, or the metrics are malformed.
pub fn handle_poll(
    config: &Config,
    job_id: &str,
    interval_ms: Option<u64>,
    timeout_secs: Option<u64>,
    flat: bool,
    out: Option<&Path>,
) -> Result<()> {
    let client = HttpJobClient::new(&config.service.base_url);
    let interval = interval_ms.map_or_else(|| config.poll_interval(), Duration::from_millis);
    let handle = job::spawn_poll(client, job_id, reporting::print_progress, interval);
    let result = match timeout_secs {
        Some(secs) => handle.join_within(Duration::from_secs(secs)),
        None => handle.join(),
    };
    let finished = result.with_context(|| format!("polling job {job_id}"))?;

    let options = GraphOptions::from_config(config, mode(flat));
    let graph = pipeline::graph_from_job(&finished, &options)?;
    emit(&graph, out)
}

fn emit(graph: &GraphPayload, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(graph)?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{json}"),
    }
    reporting::print_summary(&GraphSummary::from_nodes(&graph.nodes), graph.edges.len());
    Ok(())
}
