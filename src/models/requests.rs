use serde::{Deserialize, Serialize};

/// Body posted to the third-party lead-capture intake.
///
/// The intake service expects camelCase keys and flattened strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCapture {
    pub email: String,
    pub startup_name: String,
    pub website: String,
    pub funding_stage: String,
    /// Comma-joined selection, e.g. "FinTech, SaaS".
    pub industries: String,
    pub message: String,
}

/// Body for POST /api/startups/submit on the first-party backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupSubmission {
    pub company_name: String,
    pub founder_name: String,
    pub founder_email: String,
    /// Comma-joined sector string.
    pub sector: String,
    pub funding_stage: String,
}

/// Body for POST /api/matching/find on the first-party backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingRequest {
    pub sectors: Vec<String>,
    pub funding_stage: String,
    pub page: u32,
    pub per_page: u32,
}
