//! OpenWeatherMap wire models
//!
//! Shapes mirror the upstream JSON. The `cod` status field is a number on
//! the current-conditions feed and a string on the forecast feed; both
//! deserialize into a canonical string so callers compare against "200"
//! uniformly.

use domain::Observation;
use serde::{Deserialize, Deserializer};

use crate::client::OwmError;

/// Status probe parsed from any upstream body before the full payload
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamStatus {
    /// Upstream status code, canonicalized to a string
    #[serde(deserialize_with = "cod_as_string")]
    pub cod: String,

    /// Upstream error message, present on non-success responses. Success
    /// forecast bodies abuse this field for a numeric value, which is
    /// tolerated and ignored.
    #[serde(default, deserialize_with = "message_as_string")]
    pub message: Option<String>,
}

impl UpstreamStatus {
    /// Whether the upstream reported success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.cod == "200"
    }
}

/// `cod` arrives as `200` or `"200"` depending on the endpoint
fn cod_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cod {
        Number(i64),
        Text(String),
    }

    Ok(match Cod::deserialize(deserializer)? {
        Cod::Number(n) => n.to_string(),
        Cod::Text(s) => s,
    })
}

/// `message` is a string on rejections but a number on forecast successes
fn message_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// One weather condition entry
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherEntry {
    /// Condition code
    pub id: u32,
    /// Condition group, e.g. "Rain"
    pub main: String,
    /// Free-text label, e.g. "light rain"
    pub description: String,
    /// Icon identifier
    #[serde(default)]
    pub icon: String,
}

/// Temperature block shared by both feeds
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

/// Current-conditions payload (`/weather`)
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    /// Upstream city id
    pub id: i64,
    /// Resolved city name
    pub name: String,
    /// Observation epoch seconds
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<WeatherEntry>,
}

impl CurrentConditions {
    /// Reduce to a domain observation
    ///
    /// The first weather entry is authoritative; upstream documents the
    /// array but only the leading element is meaningful for display.
    pub fn observation(&self) -> Result<Observation, OwmError> {
        observation_from(self.dt, &self.main, &self.weather)
    }
}

/// City block of the forecast payload
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCity {
    pub id: i64,
    pub name: String,
}

/// One 3-hour forecast slice
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlice {
    /// Slice start epoch seconds
    pub dt: i64,
    pub main: MainReadings,
    pub weather: Vec<WeatherEntry>,
}

impl ForecastSlice {
    /// Reduce to a domain observation
    pub fn observation(&self) -> Result<Observation, OwmError> {
        observation_from(self.dt, &self.main, &self.weather)
    }
}

/// Forecast payload (`/forecast`)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub city: ForecastCity,
    pub list: Vec<ForecastSlice>,
}

fn observation_from(
    dt: i64,
    main: &MainReadings,
    weather: &[WeatherEntry],
) -> Result<Observation, OwmError> {
    let entry = weather
        .first()
        .ok_or_else(|| OwmError::Payload("weather entry list is empty".to_string()))?;

    Ok(Observation {
        timestamp: dt,
        weather_id: entry.id,
        description: entry.description.clone(),
        temp: main.temp,
        temp_min: main.temp_min,
        temp_max: main.temp_max,
    })
}
