//! Weather feed port
//!
//! Defines the interface for retrieving the two overlapping upstream feeds:
//! the point-in-time current conditions and the 3-hour forecast slices.
//! Both arrive already parsed and status-checked; the core never sees a
//! non-success upstream response.

use async_trait::async_trait;
use domain::{LocationSelector, Observation, Units};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// The current-conditions feed for a resolved location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentFeed {
    /// Upstream numeric location identifier; event uids derive from this
    pub location_id: i64,
    /// Resolved place name
    pub location_name: String,
    /// The single point-in-time reading
    pub observation: Observation,
}

/// The forecast feed: an ordered list of fixed-width slices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastFeed {
    /// Upstream numeric location identifier
    pub location_id: i64,
    /// Resolved place name; the calendar is titled after this
    pub location_name: String,
    /// Forecast slices in upstream order
    pub slices: Vec<Observation>,
}

/// Port for weather feed retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherFeedPort: Send + Sync {
    /// Fetch the current-conditions reading for a location
    async fn fetch_current(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<CurrentFeed, ApplicationError>;

    /// Fetch the forecast slice list for a location
    async fn fetch_forecast(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<ForecastFeed, ApplicationError>;

    /// Check if the upstream service is reachable
    async fn is_available(&self) -> bool;
}
