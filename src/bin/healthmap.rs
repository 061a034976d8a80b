// src/bin/healthmap.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use healthmap_core::cli::{self, Cli, Commands};
use healthmap_core::exit::HealthmapExit;
use healthmap_core::logging;

fn main() -> HealthmapExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match run(&cli) {
        Ok(()) => HealthmapExit::Success,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            HealthmapExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Graph {
            report,
            flat,
            deps,
            out,
        } => cli::handle_graph(&config, report, *flat, deps.as_deref(), out.as_deref()),
        Commands::Classify { methods, lines } => {
            cli::handle_classify(&config, *methods, *lines);
            Ok(())
        }
        Commands::Submit {
            github_url,
            max_files,
            no_duplicates,
            no_dead_code,
        } => cli::handle_submit(&config, github_url, *max_files, *no_duplicates, *no_dead_code),
        Commands::Poll {
            job_id,
            interval_ms,
            timeout_secs,
            flat,
            out,
        } => cli::handle_poll(
            &config,
            job_id,
            *interval_ms,
            *timeout_secs,
            *flat,
            out.as_deref(),
        ),
    }
}
