//! Weather service configuration.

use domain::Units;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Upstream weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// API credential (sensitive; prefer the secret store or
    /// FORECASTCAL_WEATHER_API_KEY over the config file)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Default unit system when a request names none
    #[serde(default)]
    pub units: Units,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key: None,
            units: Units::default(),
        }
    }
}
