//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastCalendarService;
use application::ports::WeatherFeedPort;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Service building weather calendars
    pub calendar_service: Arc<ForecastCalendarService>,
    /// Weather feed port, used by readiness checks
    pub weather: Arc<dyn WeatherFeedPort>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("calendar_service", &self.calendar_service)
            .field("weather", &"<WeatherFeedPort>")
            .finish()
    }
}
