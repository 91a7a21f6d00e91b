use crate::models::{FormState, LeadCapture};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the lead-capture intake
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Intake returned error status: {0}")]
    ApiError(String),
}

/// Client for the third-party lead-capture intake.
///
/// The intake records the raw form submission independently of the business
/// backend; it is fire-once per submit and has no read side.
pub struct LeadIntakeClient {
    endpoint_url: String,
    client: Client,
}

impl LeadIntakeClient {
    /// Create a new intake client posting to the given endpoint URL
    pub fn new(endpoint_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint_url,
            client,
        }
    }

    /// Submit a lead-capture record for the given form state.
    ///
    /// Any 2xx status counts as success; everything else is an [`IntakeError`].
    pub async fn submit_lead(&self, form: &FormState) -> Result<(), IntakeError> {
        let payload = LeadCapture {
            email: form.email.clone(),
            startup_name: form.startup_name.clone(),
            website: form.website.clone(),
            funding_stage: form.funding_stage.clone(),
            industries: form.joined_industries(),
            message: format!(
                "New investor matching request from {} ({})",
                form.startup_name, form.email
            ),
        };

        tracing::debug!("Submitting lead for {} to {}", form.startup_name, self.endpoint_url);

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IntakeError::ApiError(format!(
                "Lead submission rejected: {}",
                response.status()
            )));
        }

        tracing::debug!("Lead recorded for {}", form.startup_name);

        Ok(())
    }
}
