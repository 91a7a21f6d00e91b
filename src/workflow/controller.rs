use crate::config::Settings;
use crate::core::industries::toggle_industry;
use crate::core::pagination::{is_valid_page_change, page_window};
use crate::models::{
    FormState, MatchingFilters, MatchingRequest, MatchingResult, StartupSubmission, View,
};
use crate::services::{BackendClient, BackendError, IntakeError, LeadIntakeClient};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the matching workflow
///
/// Each variant is terminal to its operation but non-fatal to the session: the
/// controller converts it to a user-visible message and clears the busy flag,
/// and the user retries by resubmitting or re-requesting the page.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to submit form data")]
    LeadSubmission(#[source] IntakeError),

    #[error("Failed to submit startup information")]
    StartupSubmission(#[source] BackendError),

    #[error("Failed to find matching investors")]
    MatchingQuery(#[source] BackendError),

    #[error("Failed to load results page")]
    PageChange(#[source] BackendError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Matching workflow controller
///
/// Owns the form state, the result set, the pagination cursor, and the
/// form/results view machine. All mutation goes through the command methods
/// ([`submit`](Self::submit), [`change_page`](Self::change_page),
/// [`toggle_industry`](Self::toggle_industry), [`back`](Self::back),
/// [`reset`](Self::reset)); the view layer renders from the accessors.
///
/// Commands take `&mut self`, so overlapping in-flight requests cannot be
/// expressed; the busy flag additionally rejects (never queues) attempts made
/// while a request is pending.
pub struct MatchingController {
    form: FormState,
    view: View,
    busy: bool,
    last_error: Option<String>,
    result: Option<MatchingResult>,
    filters: Option<MatchingFilters>,
    per_page: u32,
    intake: LeadIntakeClient,
    backend: BackendClient,
}

impl MatchingController {
    /// Create a controller wired to the configured endpoints
    pub fn new(settings: &Settings) -> Self {
        let timeout = Duration::from_secs(settings.http.timeout_secs);

        Self {
            form: FormState::default(),
            view: View::Form,
            busy: false,
            last_error: None,
            result: None,
            filters: None,
            per_page: settings.matching.per_page,
            intake: LeadIntakeClient::new(settings.endpoints.lead_intake_url.clone(), timeout),
            backend: BackendClient::new(settings.endpoints.backend_base_url.clone(), timeout),
        }
    }

    // --- accessors ---

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn result(&self) -> Option<&MatchingResult> {
        self.result.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        !self.busy && self.form.can_submit()
    }

    /// Page-number buttons for the current result set (empty before any query).
    pub fn page_buttons(&self) -> Vec<u32> {
        self.result
            .as_ref()
            .map(|r| page_window(r.page, r.total_pages))
            .unwrap_or_default()
    }

    // --- form input handlers ---

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn set_startup_name(&mut self, name: impl Into<String>) {
        self.form.startup_name = name.into();
    }

    pub fn set_website(&mut self, website: impl Into<String>) {
        self.form.website = website.into();
    }

    pub fn set_funding_stage(&mut self, stage: impl Into<String>) {
        self.form.funding_stage = stage.into();
    }

    /// Toggle an industry selection (case-insensitive, canonical casing stored).
    pub fn toggle_industry(&mut self, label: &str) {
        toggle_industry(&mut self.form.industries, label);
    }

    // --- commands ---

    /// Run the full submission pipeline: lead capture, startup record,
    /// matching query.
    ///
    /// A no-op while busy or while the form is incomplete (the submit control
    /// is disabled in both cases). The three calls run strictly in sequence; a
    /// failure halts the pipeline and leaves earlier side effects in place.
    /// On success the result set replaces any previous one and the view
    /// transitions to [`View::Results`].
    pub async fn submit(&mut self) -> Result<(), WorkflowError> {
        if self.busy || !self.form.can_submit() {
            return Ok(());
        }

        self.busy = true;
        self.last_error = None;

        let outcome = self.run_pipeline().await;
        self.busy = false;

        if let Err(e) = &outcome {
            tracing::warn!("Submission pipeline failed: {}", e);
            self.last_error = Some(e.to_string());
        }

        outcome
    }

    async fn run_pipeline(&mut self) -> Result<(), WorkflowError> {
        self.intake
            .submit_lead(&self.form)
            .await
            .map_err(WorkflowError::LeadSubmission)?;

        // The form collects no separate founder name; the email is the
        // founder identity on the startup record.
        let submission = StartupSubmission {
            company_name: self.form.startup_name.clone(),
            founder_name: self.form.email.clone(),
            founder_email: self.form.email.clone(),
            sector: self.form.joined_industries(),
            funding_stage: self.form.funding_stage.clone(),
        };

        self.backend
            .submit_startup(&submission)
            .await
            .map_err(WorkflowError::StartupSubmission)?;

        let filters = MatchingFilters {
            sectors: self.form.industries.clone(),
            funding_stage: self.form.funding_stage.clone(),
        };

        let request = MatchingRequest {
            sectors: filters.sectors.clone(),
            funding_stage: filters.funding_stage.clone(),
            page: 1,
            per_page: self.per_page,
        };

        let response = self
            .backend
            .find_matches(&request)
            .await
            .map_err(WorkflowError::MatchingQuery)?;

        tracing::info!(
            "Matched {} investors for {} ({} pages)",
            response.count,
            self.form.startup_name,
            response.total_pages
        );

        self.result = Some(MatchingResult {
            matches: response.matches,
            count: response.count,
            page: response.page,
            per_page: response.per_page,
            total_pages: response.total_pages,
        });
        self.filters = Some(filters);
        self.view = View::Results;

        Ok(())
    }

    /// Re-query the matching backend for another page of the current results.
    ///
    /// Filters are frozen from the original submission. A no-op while busy,
    /// outside the results view, for the current page, or for a page outside
    /// [1, total_pages]. On success the match list and cursor are replaced;
    /// the total count stays frozen. On failure the displayed page is left
    /// fully intact.
    pub async fn change_page(&mut self, page: u32) -> Result<(), WorkflowError> {
        if self.busy || self.view != View::Results {
            return Ok(());
        }

        let (current, total_pages) = match &self.result {
            Some(result) => (result.page, result.total_pages),
            None => return Ok(()),
        };

        if !is_valid_page_change(page, current, total_pages) {
            return Ok(());
        }

        let Some(filters) = self.filters.clone() else {
            return Ok(());
        };

        self.busy = true;
        self.last_error = None;

        let request = MatchingRequest {
            sectors: filters.sectors,
            funding_stage: filters.funding_stage,
            page,
            per_page: self.per_page,
        };

        let outcome = self.backend.find_matches(&request).await;
        self.busy = false;

        match outcome {
            Ok(response) => {
                if let Some(result) = &mut self.result {
                    result.matches = response.matches;
                    result.page = response.page;
                    result.per_page = response.per_page;
                    result.total_pages = response.total_pages;
                    // count stays frozen from the original submission query
                }
                tracing::debug!("Moved to results page {}", page);
                Ok(())
            }
            Err(e) => {
                let err = WorkflowError::PageChange(e);
                tracing::warn!("Page change to {} failed: {}", page, err);
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Return from the results view to the form.
    ///
    /// Resets the page cursor to 1 but keeps the accumulated match data until
    /// the next submission replaces it.
    pub fn back(&mut self) {
        if let Some(result) = &mut self.result {
            result.page = 1;
        }
        self.view = View::Form;
    }

    /// Clear the whole session: form, results, filters, error.
    pub fn reset(&mut self) {
        self.form = FormState::default();
        self.result = None;
        self.filters = None;
        self.last_error = None;
        self.view = View::Form;
    }
}
