//! Forecast calendar service
//!
//! Orchestrates one request: fetch both feeds, normalize them into a sample
//! sequence, fold the sequence into merged events, and hand the events to
//! the calendar serializer. All upstream I/O is resolved before the fold
//! runs; the fold itself is synchronous and owns its state exclusively.

use std::sync::Arc;

use chrono::Utc;
use domain::{EventLog, LocationSelector, MergeParams, Units, merge_samples, normalize_samples};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{CalendarPort, WeatherFeedPort};

/// Builds a weather calendar for one location
pub struct ForecastCalendarService {
    weather: Arc<dyn WeatherFeedPort>,
    calendar: Arc<dyn CalendarPort>,
}

impl std::fmt::Debug for ForecastCalendarService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastCalendarService")
            .field("weather", &"<WeatherFeedPort>")
            .field("calendar", &"<CalendarPort>")
            .finish()
    }
}

impl ForecastCalendarService {
    /// Create a new service over the given ports
    pub fn new(weather: Arc<dyn WeatherFeedPort>, calendar: Arc<dyn CalendarPort>) -> Self {
        Self { weather, calendar }
    }

    /// Build the `text/calendar` document for a location
    ///
    /// The forecast feed is fetched first, then the current conditions,
    /// mirroring the order upstream failures surface in.
    #[instrument(skip(self), fields(units = %units))]
    pub async fn build_calendar(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<String, ApplicationError> {
        let forecast = self.weather.fetch_forecast(selector, units).await?;
        let current = self.weather.fetch_current(selector, units).await?;

        let samples = normalize_samples(&current.observation, &forecast.slices);
        let params = MergeParams {
            location_id: current.location_id.to_string(),
            created: Utc::now(),
        };

        let mut log = EventLog::new();
        merge_samples(&samples, &params, &mut log);

        debug!(
            samples = samples.len(),
            events = log.events().len(),
            location = %forecast.location_name,
            "Merged forecast into calendar events"
        );

        let calendar_name = format!("OpenWeather: {}", forecast.location_name);
        self.calendar.render(&calendar_name, log.events())
    }
}
