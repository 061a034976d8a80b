// src/job/client.rs
//! Blocking HTTP client for the analysis service.

use std::time::Duration;

use tracing::{debug, info};

use super::poll::StatusSource;
use super::types::{AnalysisJob, AnalyzeRequest, AnalyzeResponse};
use crate::error::{HealthmapError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Talks to `POST /api/analyze` and `GET /api/analysis/{id}`.
#[derive(Clone)]
pub struct HttpJobClient {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpJobClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn submit_url(&self) -> String {
        format!("{}/api/analyze", self.base_url)
    }

    #[must_use]
    pub fn status_url(&self, job_id: &str) -> String {
        format!("{}/api/analysis/{job_id}", self.base_url)
    }

    /// Queues a new analysis.
    ///
    /// # Errors
    /// Returns `Transport` on connection, HTTP status, or decode failure.
    pub fn submit(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let url = self.submit_url();
        info!(url = %url, repo = %request.github_url, "submitting analysis");
        let response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(|e| transport(&url, &e))?;
        response
            .into_json::<AnalyzeResponse>()
            .map_err(|e| HealthmapError::Transport(format!("invalid response from {url}: {e}")))
    }
}

impl StatusSource for HttpJobClient {
    fn fetch_status(&self, job_id: &str) -> Result<AnalysisJob> {
        let url = self.status_url(job_id);
        debug!(url = %url, "fetching job status");
        let response = self.agent.get(&url).call().map_err(|e| transport(&url, &e))?;
        response
            .into_json::<AnalysisJob>()
            .map_err(|e| HealthmapError::Transport(format!("invalid response from {url}: {e}")))
    }
}

fn transport(url: &str, err: &ureq::Error) -> HealthmapError {
    match err {
        ureq::Error::Status(code, _) => {
            HealthmapError::Transport(format!("{url} responded with HTTP {code}"))
        }
        ureq::Error::Transport(t) => HealthmapError::Transport(format!("{url}: {t}")),
    }
}
