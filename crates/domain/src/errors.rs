//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// No usable location selector in the request
    #[error("No location given: supply id, lat and lng, q, or zip")]
    InvalidLocationSelector,

    /// Unrecognized measurement unit system
    #[error("Invalid units: {0}. Use 'standard', 'metric', or 'imperial'")]
    InvalidUnits(String),
}
