//! Infrastructure layer for forecastcal
//!
//! Configuration loading, secret store backends, and the adapters that
//! implement the application ports.

pub mod adapters;
pub mod config;

pub use adapters::{
    EnvSecretStore, IcsCalendarAdapter, VaultConfig, VaultSecretStore, WeatherAdapter,
};
pub use config::{AppConfig, ServerConfig, VaultAppConfig, WeatherAppConfig};
