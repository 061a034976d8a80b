// src/job/poll.rs
//! Status polling for remote analysis jobs.
//!
//! One fetch at a time: the next request is only scheduled after the previous
//! snapshot has been handed to the progress callback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::types::{AnalysisJob, JobStatus};
use crate::error::{HealthmapError, Result};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);
const DEFAULT_FAILURE_MESSAGE: &str = "Analysis failed";
const JOIN_STEP: Duration = Duration::from_millis(10);

/// Anything that can report the current status of a job.
pub trait StatusSource {
    /// Fetches the latest snapshot. Must be free of side effects for the caller.
    ///
    /// # Errors
    /// Any failure is treated as a transport error by the poll loop.
    fn fetch_status(&self, job_id: &str) -> Result<AnalysisJob>;
}

impl<F> StatusSource for F
where
    F: Fn(&str) -> Result<AnalysisJob>,
{
    fn fetch_status(&self, job_id: &str) -> Result<AnalysisJob> {
        self(job_id)
    }
}

/// Shared cancellation flag, checked before every fetch.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Polls until the job completes or fails.
///
/// `on_progress` sees every snapshot, including the terminal one.
///
/// # Errors
/// - `JobFailed` with the job's message when it ends in `Failed`.
/// - `Transport` on the first fetch failure (no retry).
/// - `Cancelled` if the token is set before a fetch.
pub fn poll<S, F>(
    source: &S,
    job_id: &str,
    mut on_progress: F,
    interval: Duration,
    cancel: &CancelToken,
) -> Result<AnalysisJob>
where
    S: StatusSource + ?Sized,
    F: FnMut(&AnalysisJob),
{
    let mut attempt = 0usize;
    loop {
        if cancel.is_cancelled() {
            info!(job_id, attempt, "polling cancelled");
            return Err(HealthmapError::Cancelled);
        }
        attempt += 1;

        let job = source.fetch_status(job_id).map_err(as_transport)?;
        debug!(job_id, attempt, status = %job.status, "fetched job status");
        on_progress(&job);

        match job.status {
            JobStatus::Completed => return Ok(job),
            JobStatus::Failed => {
                let message = job
                    .error_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                return Err(HealthmapError::JobFailed(message));
            }
            JobStatus::Pending | JobStatus::Processing => thread::sleep(interval),
        }
    }
}

fn as_transport(err: HealthmapError) -> HealthmapError {
    match err {
        HealthmapError::Transport(_) => err,
        other => HealthmapError::Transport(other.to_string()),
    }
}

/// A poll loop running on its own thread.
pub struct PollHandle {
    handle: thread::JoinHandle<Result<AnalysisJob>>,
    cancel: CancelToken,
}

impl PollHandle {
    /// Requests termination. Takes effect before the next fetch.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.cancel.clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the loop to finish and returns its result.
    ///
    /// # Errors
    /// Returns whatever the poll loop returned.
    pub fn join(self) -> Result<AnalysisJob> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Waits up to `limit` for the loop to finish, then cancels it and waits
    /// for it to stop. A loop cancelled this way returns `Cancelled`.
    ///
    /// # Errors
    /// Returns whatever the poll loop returned.
    pub fn join_within(self, limit: Duration) -> Result<AnalysisJob> {
        let deadline = Instant::now() + limit;
        while !self.is_finished() {
            if Instant::now() >= deadline {
                warn!(?limit, "poll deadline reached, cancelling");
                self.cancel();
                break;
            }
            thread::sleep(JOIN_STEP);
        }
        self.join()
    }
}

/// Starts [`poll`] on a dedicated thread.
#[must_use]
pub fn spawn_poll<S, F>(source: S, job_id: impl Into<String>, on_progress: F, interval: Duration) -> PollHandle
where
    S: StatusSource + Send + 'static,
    F: FnMut(&AnalysisJob) + Send + 'static,
{
    let cancel = CancelToken::new();
    let token = cancel.clone();
    let job_id = job_id.into();
    let handle = thread::spawn(move || poll(&source, &job_id, on_progress, interval, &token));
    PollHandle { handle, cancel }
}
