use crate::models::domain::Investor;
use serde::{Deserialize, Serialize};

/// Response from POST /api/matching/find.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResponse {
    pub success: bool,
    /// Sector list as the backend resolved it (may differ from the request
    /// after server-side normalization).
    pub sectors: Vec<String>,
    pub count: usize,
    pub matches: Vec<Investor>,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// Response from POST /api/startups/submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupSubmitResponse {
    pub success: bool,
    pub message: String,
    pub startup_id: i64,
}

/// Response from GET /api/matching/sectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorsResponse {
    pub success: bool,
    pub sectors: Vec<String>,
}

/// Response from GET /api/health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
