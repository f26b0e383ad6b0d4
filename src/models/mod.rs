/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for the health check endpoint.
pub mod health;

/// # Validation Result
///
/// Per-candidate outcome types: the status/reason pair written to the report
/// and the [`validation::Verdict`] the validator reaches.
pub mod validation;

pub use health::HealthResponse;
pub use validation::{ValidationResult, ValidationStatus, Verdict};
