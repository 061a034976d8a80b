pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod health;
pub mod job;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod reporting;
pub mod types;

pub use error::{HealthmapError, Result};
pub use health::HealthLabel;
pub use pipeline::{build_graph, graph_from_job, GraphOptions, LayoutMode};
pub use types::{FileMetrics, GraphEdge, GraphNode, GraphPayload, Position};
