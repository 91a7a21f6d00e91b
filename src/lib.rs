//! VCMatch Client - client-side matching workflow for the VC matching platform
//!
//! This library owns everything behind the startup/investor matching form:
//! form state and validation, the three-step submission pipeline (lead capture,
//! startup record, matching query), pagination over the result set, and the
//! pure derivations used to render investor cards.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod workflow;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{
    derive_industry_tags, derive_stage_tags, page_window, toggle_industry, INDUSTRIES, PER_PAGE,
};
pub use crate::models::{FormState, Investor, MatchingResult, View};
pub use crate::workflow::{MatchingController, WorkflowError};
