//! Weather observations and normalized sample windows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One upstream reading before a time window has been assigned
///
/// Both feeds (the point-in-time current conditions and the 3-hour forecast
/// slices) reduce to this shape; the normalizer turns a current reading plus
/// an ordered slice list into [`WeatherSample`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Source epoch seconds
    pub timestamp: i64,
    /// Upstream condition code (open enumeration)
    pub weather_id: u32,
    /// Free-text condition label, e.g. "clear sky"
    pub description: String,
    /// Point temperature for the window
    pub temp: f64,
    /// Reported low for the window
    pub temp_min: f64,
    /// Reported high for the window
    pub temp_max: f64,
}

/// One normalized observation window
///
/// Samples are ordered by non-decreasing `start`. The first sample is the
/// current reading, whose `end` meets the first forecast slice's `start`;
/// every later sample spans exactly three hours. Coverage is assumed
/// gap-free but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Source epoch seconds of the underlying observation
    pub timestamp: i64,
    /// Window start
    pub start: DateTime<Utc>,
    /// Window end; equals `start` only for the degenerate single-reading case
    pub end: DateTime<Utc>,
    /// Upstream condition code
    pub weather_id: u32,
    /// Free-text condition label
    pub description: String,
    /// Point temperature
    pub temp: f64,
    /// Reported low
    pub temp_min: f64,
    /// Reported high
    pub temp_max: f64,
}
