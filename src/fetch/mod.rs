//! HTTP retrieval of raw collections from the workDay backend.
//!
//! Each fetch returns one typed collection or a [`FetchError`]. The goals
//! fetch is the one deliberate exception: goal data is supplementary to
//! performance scoring, so an unavailable goals endpoint degrades to an
//! empty list instead of failing the refresh.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

use crate::models::{Employee, Goal, LeaveRequest, TimeEntry};

/// Default endpoint of a locally running workDay backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/workDay";

/// Failure modes of a single collection fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connection, invalid URL).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint replied with a non-success status.
    #[error("{url} returned status {status}")]
    Response { url: String, status: StatusCode },

    /// The endpoint replied 2xx but the body did not decode as expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL does not combine into a valid request URL.
    #[error("invalid request url: {url}")]
    InvalidUrl { url: String },
}

impl FetchError {
    /// Status of a [`FetchError::Response`], if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Typed client for the workDay report endpoints.
pub struct ReportApi<C = BasicClient> {
    base_url: String,
    client: C,
}

impl ReportApi<BasicClient> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, BasicClient::new())
    }
}

impl<C: HttpClient> ReportApi<C> {
    pub fn with_client(base_url: impl Into<String>, client: C) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let parsed = url
            .parse()
            .map_err(|_| FetchError::InvalidUrl { url: url.clone() })?;
        let req = reqwest::Request::new(reqwest::Method::GET, parsed);

        let resp = self
            .client
            .execute(req)
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Response { url, status });
        }

        resp.json::<Vec<T>>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }

    /// Fetches every time entry. Required for the attendance section.
    pub async fn time_entries(&self) -> Result<Vec<TimeEntry>, FetchError> {
        self.get_json("/timeEntries/all").await
    }

    /// Fetches every leave request. Required for the leave breakdown.
    pub async fn leave_requests(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        self.get_json("/leaves").await
    }

    /// Fetches every goal, degrading to an empty list when the endpoint
    /// is unavailable. The performance report falls back to its baseline
    /// completion ratio in that case.
    pub async fn goals(&self) -> Vec<Goal> {
        match self.get_json("/goals/all").await {
            Ok(goals) => goals,
            Err(e) => {
                warn!(error = %e, "Goals endpoint unavailable, degrading to empty");
                Vec::new()
            }
        }
    }

    /// Fetches the employee directory.
    ///
    /// Older backend deployments only expose `/employees`; a 404 on
    /// `/employees/all` retries against that path.
    pub async fn employees(&self) -> Result<Vec<Employee>, FetchError> {
        match self.get_json("/employees/all").await {
            Err(e) if e.status() == Some(StatusCode::NOT_FOUND) => {
                self.get_json("/employees").await
            }
            other => other,
        }
    }
}
