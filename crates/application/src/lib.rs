//! Application layer for forecastcal
//!
//! Defines the ports the outside world is reached through and the service
//! that orchestrates feed retrieval, run merging, and calendar rendering.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ForecastCalendarService;
