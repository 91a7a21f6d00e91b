// Service exports
pub mod backend;
pub mod intake;

pub use backend::{BackendClient, BackendError};
pub use intake::{IntakeError, LeadIntakeClient};
