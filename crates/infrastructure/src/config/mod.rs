//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `weather`: upstream weather service settings and credential
//! - `vault`: Vault secret store settings
//!
//! Precedence is defaults, then an optional `config.toml`, then
//! `FORECASTCAL_*` environment variables. The upstream API key is the one
//! secret; it can arrive via file, environment, or a secret store, in that
//! order of preference.

mod server;
mod vault;
mod weather;

use application::ports::SecretStorePort;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use server::ServerConfig;
pub use vault::VaultAppConfig;
pub use weather::WeatherAppConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather service configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Vault secret store configuration
    #[serde(default)]
    pub vault: VaultAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., FORECASTCAL_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("FORECASTCAL")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Resolve secrets from a secret store into the config
    ///
    /// Only populates fields that are currently unset. Existing config
    /// values are never overridden, so config.toml and env vars take
    /// precedence over the store.
    ///
    /// The API key is read as a JSON object from `{prefix}/openweather`
    /// (field `api_key`), falling back to the plain `openweather/api-key`
    /// secret.
    pub async fn resolve_secrets(&mut self, store: &dyn SecretStorePort) {
        if self.weather.api_key.is_some() {
            debug!("Weather API key already configured; skipping secret store");
            return;
        }

        let path = self.vault.secret_path("openweather");
        info!(path = %path, "Resolving weather API key from secret store");

        match store.get_json(&path).await {
            Ok(json) => {
                if let Some(val) = json.get("api_key").and_then(|v| v.as_str())
                    && !val.is_empty()
                {
                    self.weather.api_key = Some(SecretString::from(val.to_owned()));
                    debug!("Loaded weather.api_key from secret store");
                    return;
                }
                warn!(path = %path, "Secret exists but carries no api_key field");
            }
            Err(e) => warn!(path = %path, error = %e, "Failed to resolve weather secrets"),
        }

        // Plain-key fallback for stores without structured secrets
        if let Ok(val) = store.get_secret("openweather/api-key").await
            && !val.is_empty()
        {
            self.weather.api_key = Some(SecretString::from(val));
            debug!("Loaded weather API key from plain secret");
        }
    }
}
