// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::job::JobStatus;

#[derive(Debug, Error)]
pub enum HealthmapError {
    #[error("Malformed metrics for {path}: {reason}")]
    MalformedMetrics { path: String, reason: String },

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Analysis job failed: {0}")]
    JobFailed(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Polling cancelled")]
    Cancelled,

    #[error("Analysis job is not complete (status: {0})")]
    JobNotComplete(JobStatus),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HealthmapError>;

// Allow `?` on std::io::Error by converting to HealthmapError::Io with unknown path.
impl From<std::io::Error> for HealthmapError {
    fn from(source: std::io::Error) -> Self {
        HealthmapError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl HealthmapError {
    /// Shorthand for a normalizer rejection.
    pub(crate) fn malformed(path: &str, reason: impl Into<String>) -> Self {
        Self::MalformedMetrics {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
