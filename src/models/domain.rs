use serde::{Deserialize, Serialize};
use validator::Validate;

/// Investor record returned by the matching backend.
///
/// Remote-supplied and read-only on this side: the client consumes it purely
/// for rendering and never mutates or persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investor {
    pub id: i64,
    pub investor_name: String,
    #[serde(default)]
    pub partner_name: Option<String>,
    #[serde(default)]
    pub partner_email: Option<String>,
    #[serde(default)]
    pub fund_focus_sectors: Option<String>,
    #[serde(default)]
    pub fund_stage: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub match_score: f64,
}

/// Startup profile collected by the form.
///
/// `industries` only ever holds labels in the canonical casing of
/// [`crate::core::industries::INDUSTRIES`], with no case-duplicates; mutate it
/// through [`crate::core::industries::toggle_industry`] to keep that invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FormState {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub startup_name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub funding_stage: String,
    #[serde(default)]
    pub industries: Vec<String>,
}

impl FormState {
    /// Whether the form is complete enough to submit.
    ///
    /// Presence of a valid email, a startup name, and at least one selected
    /// industry. The view layer uses this to disable the submit control.
    pub fn can_submit(&self) -> bool {
        self.validate().is_ok() && !self.industries.is_empty()
    }

    /// Comma-joined sector string sent to both remote endpoints.
    pub fn joined_industries(&self) -> String {
        self.industries.join(", ")
    }
}

/// Filters captured at submission time and reused verbatim by page changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingFilters {
    pub sectors: Vec<String>,
    pub funding_stage: String,
}

/// One page of matching results plus the pagination cursor.
///
/// Replaced wholesale on every successful query, except `count`, which stays
/// frozen at the value from the original submission query.
#[derive(Debug, Clone)]
pub struct MatchingResult {
    pub matches: Vec<Investor>,
    pub count: usize,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// Which screen the workflow is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    Results,
}
