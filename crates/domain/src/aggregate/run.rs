//! Run accumulator
//!
//! A run is a maximal stretch of temporally-adjacent samples sharing one
//! condition code, with running temperature aggregates. The average is
//! always derived from total and count, never stored.

use chrono::{DateTime, Utc};

use crate::entities::WeatherSample;
use crate::format;

use super::sink::EventFields;

/// Running aggregates for one open stretch of identical weather
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    weather_id: u32,
    description: String,
    first_timestamp: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    temp_total: f64,
    temp_count: u32,
    temp_min: f64,
    temp_max: f64,
}

impl Run {
    /// Open a run from its first sample
    ///
    /// The point temperature participates in the extremes alongside the
    /// window's own min/max fields; see the pinning test below before
    /// changing this.
    #[must_use]
    pub fn seed(sample: &WeatherSample) -> Self {
        Self {
            weather_id: sample.weather_id,
            description: sample.description.clone(),
            first_timestamp: sample.timestamp,
            start: sample.start,
            end: sample.end,
            temp_total: sample.temp,
            temp_count: 1,
            temp_min: sample.temp_min.min(sample.temp),
            temp_max: sample.temp_max.max(sample.temp),
        }
    }

    /// Whether a sample continues this run
    #[must_use]
    pub fn matches(&self, sample: &WeatherSample) -> bool {
        self.weather_id == sample.weather_id
    }

    /// Absorb the next adjacent sample with the same condition code
    pub fn absorb(&mut self, sample: &WeatherSample) {
        self.end = sample.end;
        self.temp_min = self.temp_min.min(sample.temp_min).min(sample.temp);
        self.temp_max = self.temp_max.max(sample.temp_max).max(sample.temp);
        self.temp_total += sample.temp;
        self.temp_count += 1;
    }

    /// Arithmetic mean of the absorbed point temperatures
    #[must_use]
    pub fn temp_average(&self) -> f64 {
        self.temp_total / f64::from(self.temp_count)
    }

    /// Condition code this run is keyed on
    #[must_use]
    pub const fn weather_id(&self) -> u32 {
        self.weather_id
    }

    /// Render the sink fields for the run's current state
    #[must_use]
    pub fn event_fields(&self, location_id: &str, created: DateTime<Utc>) -> EventFields {
        EventFields {
            uid: format!("{location_id}:{}", self.first_timestamp),
            summary: format::summary(
                self.weather_id,
                &self.description,
                self.temp_average(),
                self.temp_min,
                self.temp_max,
            ),
            description: format::duration_description(self.start, self.end),
            start: self.start,
            end: self.end,
            stamp: self.start,
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(timestamp: i64, weather_id: u32, temp: f64, min: f64, max: f64) -> WeatherSample {
        let start = Utc.timestamp_opt(timestamp, 0).unwrap();
        WeatherSample {
            timestamp,
            start,
            end: start + chrono::TimeDelta::hours(3),
            weather_id,
            description: "clear sky".to_string(),
            temp,
            temp_min: min,
            temp_max: max,
        }
    }

    #[test]
    fn seed_takes_first_sample_bounds() {
        let s = sample(1_600_000_000, 800, 20.0, 18.0, 22.0);
        let run = Run::seed(&s);
        assert_eq!(run.weather_id(), 800);
        assert!((run.temp_average() - 20.0).abs() < 1e-9);
        assert_eq!(run.event_fields("42", s.start).start, s.start);
        assert_eq!(run.event_fields("42", s.start).end, s.end);
    }

    #[test]
    fn absorb_extends_end_and_average() {
        let first = sample(1_600_000_000, 800, 18.0, 18.0, 18.0);
        let second = sample(1_600_010_800, 800, 20.0, 20.0, 20.0);
        let third = sample(1_600_021_600, 800, 22.0, 22.0, 22.0);

        let mut run = Run::seed(&first);
        run.absorb(&second);
        run.absorb(&third);

        assert!((run.temp_average() - 20.0).abs() < 1e-9);
        let fields = run.event_fields("42", first.start);
        assert_eq!(fields.end, third.end);
        assert_eq!(fields.uid, "42:1600000000");
    }

    // The point temperature is intentionally folded into both extremes
    // alongside the window min/max fields, matching the upstream feed's
    // historical treatment. Do not "fix" without changing the event text
    // contract.
    #[test]
    fn point_temperature_participates_in_extremes() {
        let first = sample(1_600_000_000, 800, 25.0, 20.0, 21.0);
        let run = Run::seed(&first);
        let fields = run.event_fields("42", first.start);
        // temp (25.0) exceeds temp_max (21.0) and widens the high side
        assert!(fields.summary.contains("(20.00c - 25.00c)"));

        let mut run = run;
        let colder = sample(1_600_010_800, 800, 15.0, 16.0, 22.0);
        run.absorb(&colder);
        let fields = run.event_fields("42", first.start);
        // temp (15.0) undercuts temp_min (16.0) and widens the low side
        assert!(fields.summary.contains("(15.00c - 25.00c)"));
    }

    #[test]
    fn matches_is_keyed_on_condition_code_only() {
        let s = sample(1_600_000_000, 800, 20.0, 18.0, 22.0);
        let run = Run::seed(&s);
        let mut other = sample(1_600_010_800, 800, -5.0, -5.0, -5.0);
        assert!(run.matches(&other));
        other.weather_id = 501;
        assert!(!run.matches(&other));
    }
}
