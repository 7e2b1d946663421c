//! Calendar feed handler
//!
//! One query, one document: pick the location selector, build the merged
//! calendar, and return it as `text/calendar` so calendar clients can
//! subscribe to the URL directly.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use domain::{LocationSelector, Units};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the calendar feed
///
/// Exactly one selector is used, in precedence order: `id`, `lat`+`lng`,
/// `q`, `zip`.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Upstream city id
    pub id: Option<String>,
    /// Latitude, paired with `lng`
    pub lat: Option<f64>,
    /// Longitude, paired with `lat`
    pub lng: Option<f64>,
    /// Free-text place name
    pub q: Option<String>,
    /// Postal code
    pub zip: Option<String>,
    /// Unit system (standard, metric, imperial); defaults to metric
    pub units: Option<Units>,
}

/// Serve the merged weather calendar
///
/// GET /calendar?q=London
#[instrument(skip(state, query))]
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let selector =
        LocationSelector::from_parts(query.id, query.lat, query.lng, query.q, query.zip)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let units = query.units.unwrap_or_default();

    info!(?selector, %units, "Building weather calendar");

    let body = state
        .calendar_service
        .build_calendar(&selector, units)
        .await?;

    Ok(([(header::CONTENT_TYPE, "text/calendar")], body))
}
