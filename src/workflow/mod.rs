// Workflow exports
pub mod controller;

pub use controller::{MatchingController, WorkflowError};
