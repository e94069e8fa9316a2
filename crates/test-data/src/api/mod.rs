//! API-based seeding for runs.
//!
//! Uploads generated runs through the HTTP API so they pass the same
//! validation as runs entered by hand.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::generators::GeneratedRun;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Backend not reachable at {0}")]
    BackendNotReachable(String),
}

/// Response from the run creation endpoint.
#[derive(Debug, Deserialize)]
struct RunResponse {
    id: Uuid,
}

/// Response from the bulk delete endpoint.
#[derive(Debug, Deserialize)]
struct DeleteAllResponse {
    deleted: usize,
}

/// API seeder that uploads runs via HTTP.
pub struct ApiSeeder {
    client: Client,
    base_url: String,
}

impl ApiSeeder {
    /// Creates a new API seeder for the given backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Checks if the backend is reachable.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(ApiError::BackendNotReachable(format!(
                "Health check returned status {}",
                resp.status()
            ))),
            Err(e) => Err(ApiError::BackendNotReachable(e.to_string())),
        }
    }

    /// Deletes every stored run and returns how many were removed.
    pub async fn clear(&self) -> Result<usize, ApiError> {
        let url = format!("{}/runs", self.base_url);
        let resp = self.client.delete(&url).send().await?.error_for_status()?;
        let body: DeleteAllResponse = resp.json().await?;
        debug!("Cleared {} existing runs", body.deleted);
        Ok(body.deleted)
    }

    /// Creates a single run via the API.
    pub async fn create_run(&self, run: &GeneratedRun) -> Result<Uuid, ApiError> {
        let url = format!("{}/runs", self.base_url);
        let resp = self.client.post(&url).json(run).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::UploadFailed(format!("Status {status}: {body}")));
        }

        let created: RunResponse = resp.json().await?;
        debug!("Created run {} on {}", created.id, run.date);
        Ok(created.id)
    }

    /// Uploads all runs, skipping ones the server rejects.
    ///
    /// Returns the ids of the runs that were created.
    pub async fn seed(&self, runs: &[GeneratedRun]) -> Result<Vec<Uuid>, ApiError> {
        let mut ids = Vec::with_capacity(runs.len());
        for run in runs {
            match self.create_run(run).await {
                Ok(id) => ids.push(id),
                Err(ApiError::UploadFailed(reason)) => {
                    warn!("Skipping run on {}: {reason}", run.date);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(ids)
    }
}
