//! Merged calendar events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One calendar event covering a contiguous run of identical weather
///
/// Immutable once the merge pass has finished. The `uid` is derived from the
/// upstream location identifier and the first absorbed sample's source
/// timestamp, so re-generating the calendar yields stable identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedEvent {
    /// `{location_id}:{first_sample_timestamp}`
    pub uid: String,
    /// Emoji + condition + temperature summary line
    pub summary: String,
    /// Human-readable duration text
    pub description: String,
    /// Start of the first absorbed sample
    pub start: DateTime<Utc>,
    /// End of the last absorbed sample
    pub end: DateTime<Utc>,
    /// Event timestamp; mirrors `start`
    pub stamp: DateTime<Utc>,
    /// Instant the calendar was generated
    pub created: DateTime<Utc>,
}
