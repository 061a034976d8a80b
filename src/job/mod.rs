// src/job/mod.rs
//! Remote analysis jobs: wire types, HTTP client, and status polling.

pub mod client;
pub mod poll;
pub mod types;

pub use client::HttpJobClient;
pub use poll::{poll, spawn_poll, CancelToken, PollHandle, StatusSource, DEFAULT_INTERVAL};
pub use types::{
    AnalysisJob, AnalyzeOptions, AnalyzeRequest, AnalyzeResponse, JobStatus, ServiceEdge, ServiceGraph,
    ServiceNode,
};
