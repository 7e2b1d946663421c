//! OpenWeatherMap HTTP client
//!
//! Both endpoints take the same location selector and units parameters plus
//! the `APPID` credential. Upstream reports success through the in-body
//! `cod` field, which does not always agree with the HTTP status, so the
//! body probe runs on every response.

use async_trait::async_trait;
use domain::{LocationSelector, Units};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentConditions, ForecastResponse, UpstreamStatus};

/// Weather client errors
#[derive(Debug, Error)]
pub enum OwmError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered but reported a non-success `cod`
    #[error("Upstream rejected request ({status}): {message}")]
    UpstreamRejected { status: String, message: String },

    /// Failed to interpret a response body
    #[error("Payload error: {0}")]
    Payload(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone)]
pub struct OwmConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    pub timeout_secs: u64,

    /// API credential sent as `APPID`
    pub api_key: SecretString,
}

impl OwmConfig {
    /// Create a configuration with the default endpoint and timeout
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            api_key,
        }
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

/// Weather API trait for fetching the two feeds
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Get current conditions for a location
    async fn current(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<CurrentConditions, OwmError>;

    /// Get the 5-day/3-hour forecast for a location
    async fn forecast(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<ForecastResponse, OwmError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OwmClient {
    client: Client,
    config: OwmConfig,
}

impl OwmClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OwmConfig) -> Result<Self, OwmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OwmError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Query pairs common to both endpoints
    fn query_pairs(&self, selector: &LocationSelector, units: Units) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("APPID", self.config.api_key.expose_secret().to_string()),
            ("units", units.as_str().to_string()),
        ];
        pairs.extend(selector.query_pairs());
        pairs
    }

    /// Issue one request and run the two-stage body parse
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<T, OwmError> {
        let url = format!("{}/{endpoint}", self.config.base_url);
        debug!(endpoint, "Fetching weather feed");

        let response = self
            .client
            .get(&url)
            .query(&self.query_pairs(selector, units))
            .send()
            .await
            .map_err(|e| OwmError::RequestFailed(e.to_string()))?;

        let http_status = response.status();
        if http_status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OwmError::RateLimitExceeded);
        }
        if http_status.is_server_error() {
            return Err(OwmError::ServiceUnavailable(format!("HTTP {http_status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| OwmError::RequestFailed(e.to_string()))?;

        // Probe the in-body status before committing to the full shape: on
        // rejection only `cod` and `message` are reliably present.
        let status: UpstreamStatus = serde_json::from_str(&body)
            .map_err(|e| OwmError::Payload(format!("unreadable status: {e}")))?;
        if !status.is_success() {
            return Err(OwmError::UpstreamRejected {
                status: status.cod,
                message: status
                    .message
                    .unwrap_or_else(|| "no message from upstream".to_string()),
            });
        }

        serde_json::from_str(&body).map_err(|e| OwmError::Payload(e.to_string()))
    }
}

#[async_trait]
impl WeatherApi for OwmClient {
    #[instrument(skip(self), fields(units = %units))]
    async fn current(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<CurrentConditions, OwmError> {
        self.fetch("weather", selector, units).await
    }

    #[instrument(skip(self), fields(units = %units))]
    async fn forecast(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<ForecastResponse, OwmError> {
        self.fetch("forecast", selector, units).await
    }

    async fn is_healthy(&self) -> bool {
        // Lightweight probe against a fixed reference point
        let selector = LocationSelector::Coordinates {
            lat: 51.51,
            lng: -0.13,
        };
        self.current(&selector, Units::Metric).await.is_ok()
    }
}
