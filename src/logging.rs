// src/logging.rs
//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

pub const LOG_ENV: &str = "HEALTHMAP_LOG";

/// Installs the global subscriber, writing to stderr.
///
/// Reads `HEALTHMAP_LOG` for directives, e.g. `HEALTHMAP_LOG=healthmap_core=debug`.
/// Falls back to `healthmap_core=info` (or `debug` when `verbose`).
/// Calling it more than once is a no-op.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "healthmap_core=debug,healthmap=debug"
        } else {
            "healthmap_core=info,healthmap=info"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
