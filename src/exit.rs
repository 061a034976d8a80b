// src/exit.rs
//! Standardized process exit codes for `healthmap`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::HealthmapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum HealthmapExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, unreadable report).
    Error = 1,
    /// Input validation failed (malformed metrics, duplicate ids, bad config).
    InvalidInput = 2,
    /// The remote analysis ended in `failed`, or is not complete yet.
    JobFailed = 3,
    /// The analysis service could not be reached or answered garbage.
    Transport = 4,
    /// Polling was cancelled.
    Cancelled = 5,
}

impl HealthmapExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Maps an error chain to an exit code by its innermost `HealthmapError`.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<HealthmapError>() {
            Some(
                HealthmapError::MalformedMetrics { .. }
                | HealthmapError::DuplicateNodeId(_)
                | HealthmapError::InvalidConfig(_),
            ) => Self::InvalidInput,
            Some(HealthmapError::JobFailed(_) | HealthmapError::JobNotComplete(_)) => {
                Self::JobFailed
            }
            Some(HealthmapError::Transport(_)) => Self::Transport,
            Some(HealthmapError::Cancelled) => Self::Cancelled,
            Some(HealthmapError::Io { .. } | HealthmapError::Json(_)) | None => Self::Error,
        }
    }
}

impl Termination for HealthmapExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
