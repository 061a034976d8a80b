// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
pub use handlers::{handle_classify, handle_graph, handle_poll, handle_submit, load_config};
