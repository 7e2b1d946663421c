//! Event text formatting
//!
//! Produces the summary line and the duration description for a merged run.
//! Pure functions over the run's aggregates; the merger calls these on every
//! transition.

use chrono::{DateTime, TimeDelta, Utc};

use crate::value_objects::emoji_for;

/// Summary line for a run
///
/// Renders as `"{emoji}{description}: {avg}c ({min}c - {max}c)"` with
/// temperatures at two decimal places. Unknown condition codes contribute an
/// empty emoji prefix.
#[must_use]
pub fn summary(weather_id: u32, description: &str, avg: f64, min: f64, max: f64) -> String {
    format!(
        "{}{description}: {avg:.2}c ({min:.2}c - {max:.2}c)",
        emoji_for(weather_id)
    )
}

/// Duration description for a run, e.g. "For about 3 hours"
#[must_use]
pub fn duration_description(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("For about {}", human_duration(end - start))
}

/// Calendar-aware duration phrasing
///
/// Tiers follow the distance-between-dates wording common in calendar UIs:
/// seconds collapse to "less than a minute", minutes and hours round to the
/// nearest whole unit, anything from 42 hours up is counted in days.
#[must_use]
pub fn human_duration(delta: TimeDelta) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let secs = delta.num_seconds().max(0);
    if secs < 45 {
        "less than a minute".to_string()
    } else if secs < 90 {
        "1 minute".to_string()
    } else if secs < 45 * MINUTE {
        format!("{} minutes", div_round(secs, MINUTE))
    } else if secs < 90 * MINUTE {
        "1 hour".to_string()
    } else if secs < DAY {
        format!("{} hours", div_round(secs, HOUR))
    } else if secs < 42 * HOUR {
        "1 day".to_string()
    } else {
        format!("{} days", div_round(secs, DAY))
    }
}

/// Integer division rounded to the nearest unit
const fn div_round(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}
