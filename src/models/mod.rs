// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FormState, Investor, MatchingFilters, MatchingResult, View};
pub use requests::{LeadCapture, MatchingRequest, StartupSubmission};
pub use responses::{HealthResponse, MatchingResponse, SectorsResponse, StartupSubmitResponse};
