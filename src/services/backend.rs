use crate::models::{
    HealthResponse, MatchingRequest, MatchingResponse, SectorsResponse, StartupSubmission,
    StartupSubmitResponse,
};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the matching backend
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// First-party matching backend client
///
/// Handles all communication with the VC matching API including:
/// - Recording startup submissions
/// - Querying matched investors page by page
/// - Fetching the offered sector list
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    /// Create a new backend client for the given base URL
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Record a normalized startup submission.
    pub async fn submit_startup(
        &self,
        submission: &StartupSubmission,
    ) -> Result<StartupSubmitResponse, BackendError> {
        let url = self.url("/api/startups/submit");

        tracing::debug!("Submitting startup {} to {}", submission.company_name, url);

        let response = self.client.post(&url).json(submission).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::ApiError(format!(
                "Failed to submit startup: {}",
                response.status()
            )));
        }

        response
            .json::<StartupSubmitResponse>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse submit response: {}", e)))
    }

    /// Query one page of matched investors.
    pub async fn find_matches(
        &self,
        request: &MatchingRequest,
    ) -> Result<MatchingResponse, BackendError> {
        let url = self.url("/api/matching/find");

        tracing::debug!(
            "Querying matches for sectors {:?} (page {} of size {})",
            request.sectors,
            request.page,
            request.per_page
        );

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::ApiError(format!(
                "Failed to find matches: {}",
                response.status()
            )));
        }

        response
            .json::<MatchingResponse>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse matching response: {}", e)))
    }

    /// Fetch the sector list the backend offers for selection.
    pub async fn fetch_sectors(&self) -> Result<SectorsResponse, BackendError> {
        let url = self.url("/api/matching/sectors");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::ApiError(format!(
                "Failed to fetch sectors: {}",
                response.status()
            )));
        }

        response
            .json::<SectorsResponse>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse sectors response: {}", e)))
    }

    /// Backend health probe.
    pub async fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = self.url("/api/health");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )));
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse health response: {}", e)))
    }
}
