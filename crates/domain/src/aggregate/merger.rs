//! The run merger
//!
//! An explicit fold over the normalized sample sequence. State is a single
//! optional open run; sink writes happen eagerly on every transition, so
//! there is no flush step: when the input is exhausted the last open run's
//! sink entry is already final.

use chrono::{DateTime, Utc};

use crate::entities::WeatherSample;

use super::run::Run;
use super::sink::{EventHandle, EventSink};

/// Inputs that stay constant across one merge pass
#[derive(Debug, Clone)]
pub struct MergeParams {
    /// External identifier event uids are derived from
    pub location_id: String,
    /// Generation instant stamped on every event
    pub created: DateTime<Utc>,
}

/// Fold state: the currently open run paired with its sink handle
#[derive(Debug, Default)]
pub struct MergeState {
    open: Option<(Run, EventHandle)>,
}

impl MergeState {
    /// Condition code of the open run, if any
    #[must_use]
    pub fn open_weather_id(&self) -> Option<u32> {
        self.open.as_ref().map(|(run, _)| run.weather_id())
    }
}

/// Apply one sample to the fold state
///
/// Same condition code as the open run: extend it and rewrite its sink
/// entry. Otherwise the open run is closed (a bookkeeping-only act; its sink
/// entry needs no further touch) and a fresh run is seeded and created.
/// Runs form strictly by adjacency; equal codes separated by a different
/// one never merge.
pub fn step<S: EventSink>(
    mut state: MergeState,
    sample: &WeatherSample,
    params: &MergeParams,
    sink: &mut S,
) -> MergeState {
    match state.open.take() {
        Some((mut run, handle)) if run.matches(sample) => {
            run.absorb(sample);
            sink.update(handle, &run.event_fields(&params.location_id, params.created));
            state.open = Some((run, handle));
        }
        _ => {
            let run = Run::seed(sample);
            let handle = sink.create(&run.event_fields(&params.location_id, params.created));
            state.open = Some((run, handle));
        }
    }
    state
}

/// Fold an entire sample sequence into a sink
///
/// Empty input writes nothing; a single sample yields exactly one event.
pub fn merge_samples<S: EventSink>(samples: &[WeatherSample], params: &MergeParams, sink: &mut S) {
    let mut state = MergeState::default();
    for sample in samples {
        state = step(state, sample, params, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::sink::EventLog;
    use chrono::TimeZone;

    fn params() -> MergeParams {
        MergeParams {
            location_id: "2643743".to_string(),
            created: Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample(index: i64, weather_id: u32, description: &str, temp: f64) -> WeatherSample {
        let timestamp = 1_600_000_000 + index * 10_800;
        let start = Utc.timestamp_opt(timestamp, 0).unwrap();
        WeatherSample {
            timestamp,
            start,
            end: start + chrono::TimeDelta::hours(3),
            weather_id,
            description: description.to_string(),
            temp,
            temp_min: temp,
            temp_max: temp,
        }
    }

    #[test]
    fn empty_input_emits_nothing() {
        let mut log = EventLog::new();
        merge_samples(&[], &params(), &mut log);
        assert!(log.events().is_empty());
    }

    #[test]
    fn single_sample_emits_one_event() {
        let mut log = EventLog::new();
        merge_samples(&[sample(0, 800, "clear sky", 20.0)], &params(), &mut log);
        assert_eq!(log.events().len(), 1);
        assert_eq!(log.events()[0].uid, "2643743:1600000000");
    }

    // Scenario: three consecutive clear-sky samples at 18/20/22 degrees
    // collapse into one event with the averaged summary.
    #[test]
    fn adjacent_same_condition_samples_merge() {
        let samples = vec![
            sample(0, 800, "clear sky", 18.0),
            sample(1, 800, "clear sky", 20.0),
            sample(2, 800, "clear sky", 22.0),
        ];

        let mut log = EventLog::new();
        merge_samples(&samples, &params(), &mut log);

        assert_eq!(log.events().len(), 1);
        let event = &log.events()[0];
        assert_eq!(event.summary, "☀️clear sky: 20.00c (18.00c - 22.00c)");
        assert_eq!(event.start, samples[0].start);
        assert_eq!(event.end, samples[2].end);
        assert_eq!(event.stamp, samples[0].start);
        assert_eq!(event.description, "For about 9 hours");
    }

    // Scenario: clear, rain, clear. The two clear stretches are separated
    // and must not merge across the rain.
    #[test]
    fn interleaved_conditions_never_merge_across() {
        let samples = vec![
            sample(0, 800, "clear sky", 20.0),
            sample(1, 501, "moderate rain", 15.0),
            sample(2, 800, "clear sky", 21.0),
        ];

        let mut log = EventLog::new();
        merge_samples(&samples, &params(), &mut log);

        let events = log.events();
        assert_eq!(events.len(), 3);
        assert!(events[0].summary.starts_with("☀️"));
        assert!(events[1].summary.starts_with("🌧️"));
        assert!(events[2].summary.starts_with("☀️"));
        assert_eq!(events[0].uid, "2643743:1600000000");
        assert_eq!(events[2].uid, "2643743:1600021600");
    }

    #[test]
    fn extension_rewrites_the_open_event_in_place() {
        let samples = vec![
            sample(0, 804, "overcast clouds", 10.0),
            sample(1, 804, "overcast clouds", 12.0),
        ];

        let mut log = EventLog::new();
        let mut state = MergeState::default();
        state = step(state, &samples[0], &params(), &mut log);
        assert_eq!(log.events()[0].description, "For about 3 hours");

        state = step(state, &samples[1], &params(), &mut log);
        assert_eq!(state.open_weather_id(), Some(804));
        assert_eq!(log.events().len(), 1);
        assert_eq!(log.events()[0].description, "For about 6 hours");
        assert_eq!(log.events()[0].summary, "☁️overcast clouds: 11.00c (10.00c - 12.00c)");
    }

    #[test]
    fn event_count_equals_adjacent_condition_changes() {
        let ids = [800, 800, 501, 501, 501, 800, 600, 600];
        let samples: Vec<_> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| sample(i64::try_from(i).unwrap(), *id, "w", 10.0))
            .collect();

        let mut log = EventLog::new();
        merge_samples(&samples, &params(), &mut log);

        assert_eq!(log.events().len(), 4);
    }
}
