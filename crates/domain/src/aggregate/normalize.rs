//! Feed normalization
//!
//! Maps the two upstream record shapes (one current reading plus an ordered
//! list of forecast slices) into a single uniform sample sequence.

use chrono::{DateTime, TimeDelta, Utc};

use crate::entities::{Observation, WeatherSample};

/// Width of one forecast slice
fn slice_width() -> TimeDelta {
    TimeDelta::hours(3)
}

/// Normalize a current reading plus forecast slices into `1 + N` samples
///
/// The current reading's window runs until the first forecast slice begins;
/// each slice spans exactly three hours from its own timestamp. With an
/// empty slice list the current reading degenerates to a single zero-width
/// sample, which downstream treats as a regular (if instantaneous) window.
/// No reordering, filtering, or deduplication happens here.
#[must_use]
pub fn normalize_samples(current: &Observation, slices: &[Observation]) -> Vec<WeatherSample> {
    let mut samples = Vec::with_capacity(1 + slices.len());

    let current_start = instant(current.timestamp);
    let current_end = slices
        .first()
        .map_or(current_start, |slice| instant(slice.timestamp));
    samples.push(sample_for(current, current_start, current_end));

    for slice in slices {
        let start = instant(slice.timestamp);
        samples.push(sample_for(slice, start, start + slice_width()));
    }

    samples
}

fn instant(epoch_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch_secs, 0).unwrap_or_default()
}

fn sample_for(obs: &Observation, start: DateTime<Utc>, end: DateTime<Utc>) -> WeatherSample {
    WeatherSample {
        timestamp: obs.timestamp,
        start,
        end,
        weather_id: obs.weather_id,
        description: obs.description.clone(),
        temp: obs.temp,
        temp_min: obs.temp_min,
        temp_max: obs.temp_max,
    }
}
