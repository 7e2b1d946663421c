//! Adapters implementing the application ports

mod env_secret_store;
mod ics_calendar;
mod vault_secret_store;
mod weather_adapter;

pub use env_secret_store::EnvSecretStore;
pub use ics_calendar::IcsCalendarAdapter;
pub use vault_secret_store::{VaultConfig, VaultSecretStore};
pub use weather_adapter::WeatherAdapter;
