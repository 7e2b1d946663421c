//! Domain layer for forecastcal
//!
//! Contains the weather-run aggregation core: entities, value objects,
//! sample normalization, the run merger, and summary formatting.
//! This layer has no I/O dependencies and defines the ubiquitous language.

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod format;
pub mod value_objects;

pub use aggregate::{
    EventFields, EventHandle, EventLog, EventSink, MergeParams, MergeState, merge_samples,
    normalize_samples,
};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
