//! Application services

mod forecast_calendar_service;

pub use forecast_calendar_service::ForecastCalendarService;
