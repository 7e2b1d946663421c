//! Weather adapter - implements `WeatherFeedPort` using `integration_weather`

use application::error::ApplicationError;
use application::ports::{CurrentFeed, ForecastFeed, WeatherFeedPort};
use async_trait::async_trait;
use domain::{LocationSelector, Units};
use integration_weather::{OwmClient, OwmConfig, OwmError, WeatherApi};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap feeds
pub struct WeatherAdapter {
    client: OwmClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OwmClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter over a configured client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OwmConfig) -> Result<Self, ApplicationError> {
        let client =
            OwmClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: OwmError) -> ApplicationError {
        match err {
            OwmError::ConnectionFailed(e)
            | OwmError::RequestFailed(e)
            | OwmError::ServiceUnavailable(e) => ApplicationError::UpstreamService(e),
            OwmError::UpstreamRejected { message, .. } => {
                ApplicationError::UpstreamService(message)
            }
            OwmError::Payload(e) => ApplicationError::MalformedPayload(e),
            OwmError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl WeatherFeedPort for WeatherAdapter {
    #[instrument(skip(self), fields(units = %units))]
    async fn fetch_current(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<CurrentFeed, ApplicationError> {
        let current = self
            .client
            .current(selector, units)
            .await
            .map_err(Self::map_error)?;

        let observation = current.observation().map_err(Self::map_error)?;
        debug!(
            location = %current.name,
            weather_id = observation.weather_id,
            "Retrieved current conditions"
        );

        Ok(CurrentFeed {
            location_id: current.id,
            location_name: current.name,
            observation,
        })
    }

    #[instrument(skip(self), fields(units = %units))]
    async fn fetch_forecast(
        &self,
        selector: &LocationSelector,
        units: Units,
    ) -> Result<ForecastFeed, ApplicationError> {
        let forecast = self
            .client
            .forecast(selector, units)
            .await
            .map_err(Self::map_error)?;

        let slices = forecast
            .list
            .iter()
            .map(|slice| slice.observation().map_err(Self::map_error))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            location = %forecast.city.name,
            slices = slices.len(),
            "Retrieved forecast slices"
        );

        Ok(ForecastFeed {
            location_id: forecast.city.id,
            location_name: forecast.city.name,
            slices,
        })
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn adapter() -> WeatherAdapter {
        WeatherAdapter::new(OwmConfig::new(SecretString::from("test-key"))).unwrap()
    }

    #[test]
    fn new_creates_adapter() {
        let _ = adapter();
    }

    #[test]
    fn debug_impl_hides_internals() {
        let debug_str = format!("{:?}", adapter());
        assert!(debug_str.contains("WeatherAdapter"));
        assert!(!debug_str.contains("test-key"));
    }

    #[test]
    fn map_error_rejection_carries_upstream_message() {
        let err = OwmError::UpstreamRejected {
            status: "404".to_string(),
            message: "city not found".to_string(),
        };
        let app_err = WeatherAdapter::map_error(err);
        let ApplicationError::UpstreamService(msg) = app_err else {
            unreachable!("Expected UpstreamService");
        };
        assert_eq!(msg, "city not found");
    }

    #[test]
    fn map_error_payload() {
        let err = OwmError::Payload("bad json".to_string());
        assert!(matches!(
            WeatherAdapter::map_error(err),
            ApplicationError::MalformedPayload(_)
        ));
    }

    #[test]
    fn map_error_rate_limited() {
        assert!(matches!(
            WeatherAdapter::map_error(OwmError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
