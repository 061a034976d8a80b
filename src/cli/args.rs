// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthmap", version, about = "Health-classified, folder-aware graphs from code metrics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Use this config file instead of ./healthmap.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a graph from an Emerge JSON report
    Graph {
        /// Emerge report (`local-metrics` keyed by path)
        report: PathBuf,
        /// Use the flat grid instead of the folder layout
        #[arg(long)]
        flat: bool,
        /// Dependency map JSON (`{"a.py": ["b.py"]}`)
        #[arg(long, value_name = "FILE")]
        deps: Option<PathBuf>,
        /// Write the graph here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Classify a single file's metrics
    Classify {
        #[arg(long)]
        methods: u64,
        #[arg(long)]
        lines: u64,
    },
    /// Queue a repository analysis on the service
    Submit {
        github_url: String,
        #[arg(long)]
        max_files: Option<u32>,
        #[arg(long)]
        no_duplicates: bool,
        #[arg(long)]
        no_dead_code: bool,
    },
    /// Poll a job until it finishes, then emit its graph
    Poll {
        job_id: String,
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
        /// Give up (exit code 5) if the job has not finished after this long
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
        #[arg(long)]
        flat: bool,
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}
