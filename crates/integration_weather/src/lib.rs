//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap 2.5 API (<https://openweathermap.org/api>).
//! Fetches current conditions and the 5-day/3-hour forecast; both endpoints
//! require an API key.

pub mod client;
mod models;

pub use client::{OwmClient, OwmConfig, OwmError, WeatherApi};
pub use models::{
    CurrentConditions, ForecastCity, ForecastResponse, ForecastSlice, MainReadings,
    UpstreamStatus, WeatherEntry,
};
