// src/reporting.rs
//! Console output for graph summaries and job progress.
//!
//! Everything here writes to stderr so the graph JSON can own stdout.

use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::graph::GraphSummary;
use crate::health::HealthLabel;
use crate::job::{AnalysisJob, JobStatus};

/// Paints a health label in its own color.
#[must_use]
pub fn paint(label: HealthLabel) -> ColoredString {
    match label {
        HealthLabel::Green => label.label().green(),
        HealthLabel::Yellow => label.label().yellow(),
        HealthLabel::Red => label.label().red(),
    }
}

fn format_count(n: usize, label: HealthLabel) -> String {
    if n == 0 {
        n.to_string().dimmed().to_string()
    } else {
        paint_count(n, label)
    }
}

fn paint_count(n: usize, label: HealthLabel) -> String {
    let s = n.to_string();
    match label {
        HealthLabel::Green => s.green().to_string(),
        HealthLabel::Yellow => s.yellow().to_string(),
        HealthLabel::Red => s.red().bold().to_string(),
    }
}

/// Renders the summary block.
#[must_use]
pub fn render_summary(summary: &GraphSummary, edges: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{} {} files | {} edges | {} lines",
        "HEALTH MAP".cyan().bold(),
        summary.total_files,
        edges,
        summary.total_loc
    );
    let _ = writeln!(
        out,
        "  {} green | {} yellow | {} red",
        format_count(summary.green, HealthLabel::Green),
        format_count(summary.yellow, HealthLabel::Yellow),
        format_count(summary.red, HealthLabel::Red),
    );
    let _ = writeln!(
        out,
        "  avg {:.1} methods, {:.1} lines per file",
        summary.avg_methods_per_file, summary.avg_loc_per_file
    );
    if let Some(lang) = &summary.primary_language {
        let _ = writeln!(out, "  primary language: {}", lang.bold());
    }
    out
}

pub fn print_summary(summary: &GraphSummary, edges: usize) {
    eprint!("{}", render_summary(summary, edges));
}

/// One progress line per poll snapshot.
#[must_use]
pub fn render_progress(job: &AnalysisJob) -> String {
    let status = match job.status {
        JobStatus::Pending => job.status.label().dimmed(),
        JobStatus::Processing => job.status.label().cyan(),
        JobStatus::Completed => job.status.label().green().bold(),
        JobStatus::Failed => job.status.label().red().bold(),
    };
    match &job.repository_name {
        Some(repo) => format!("  {} {repo} [{status}]", job.id.dimmed()),
        None => format!("  {} [{status}]", job.id.dimmed()),
    }
}

pub fn print_progress(job: &AnalysisJob) {
    eprintln!("{}", render_progress(job));
}
