//! Ports through which the application reaches the outside world

mod calendar_port;
mod secret_store;
mod weather_port;

pub use calendar_port::CalendarPort;
pub use secret_store::SecretStorePort;
pub use weather_port::{CurrentFeed, ForecastFeed, WeatherFeedPort};

#[cfg(test)]
pub use calendar_port::MockCalendarPort;
#[cfg(test)]
pub use weather_port::MockWeatherFeedPort;
