//! forecastcal HTTP presentation layer
//!
//! This crate provides the HTTP API: one calendar endpoint plus health
//! checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
