//! Location selection and measurement units
//!
//! The request surface accepts exactly one way of naming a place. Selector
//! precedence is id, then lat+lng, then q, then zip; the first complete
//! selector wins.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One way of naming a place to the upstream weather service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSelector {
    /// Upstream city id
    CityId(String),
    /// Geographic coordinates
    Coordinates { lat: f64, lng: f64 },
    /// Free-text place name
    Name(String),
    /// Postal code
    Zip(String),
}

impl LocationSelector {
    /// Pick a selector from the optional request parts
    ///
    /// A lone `lat` without `lng` (or vice versa) is not a complete
    /// selector and falls through to the next candidate.
    pub fn from_parts(
        id: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
        q: Option<String>,
        zip: Option<String>,
    ) -> Result<Self, DomainError> {
        if let Some(id) = id {
            return Ok(Self::CityId(id));
        }
        if let (Some(lat), Some(lng)) = (lat, lng) {
            return Ok(Self::Coordinates { lat, lng });
        }
        if let Some(q) = q {
            return Ok(Self::Name(q));
        }
        if let Some(zip) = zip {
            return Ok(Self::Zip(zip));
        }
        Err(DomainError::InvalidLocationSelector)
    }

    /// Query pairs this selector contributes to an upstream request
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CityId(id) => vec![("id", id.clone())],
            Self::Coordinates { lat, lng } => {
                vec![("lat", lat.to_string()), ("lng", lng.to_string())]
            }
            Self::Name(q) => vec![("q", q.clone())],
            Self::Zip(zip) => vec![("zip", zip.clone())],
        }
    }
}

/// Measurement unit system understood by the upstream service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin
    Standard,
    /// Celsius (default)
    #[default]
    Metric,
    /// Fahrenheit
    Imperial,
}

impl Units {
    /// The upstream query-string value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Units {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(DomainError::InvalidUnits(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_takes_precedence_over_everything() {
        let selector = LocationSelector::from_parts(
            Some("2643743".to_string()),
            Some(51.5),
            Some(-0.1),
            Some("London".to_string()),
            Some("E1".to_string()),
        )
        .expect("id selector");
        assert_eq!(selector, LocationSelector::CityId("2643743".to_string()));
    }

    #[test]
    fn coordinates_need_both_parts() {
        let selector =
            LocationSelector::from_parts(None, Some(51.5), None, Some("London".to_string()), None)
                .expect("falls through to q");
        assert_eq!(selector, LocationSelector::Name("London".to_string()));
    }

    #[test]
    fn zip_is_last_resort() {
        let selector = LocationSelector::from_parts(None, None, None, None, Some("E1".to_string()))
            .expect("zip selector");
        assert_eq!(selector, LocationSelector::Zip("E1".to_string()));
    }

    #[test]
    fn no_parts_is_an_error() {
        let result = LocationSelector::from_parts(None, None, None, None, None);
        assert!(matches!(result, Err(DomainError::InvalidLocationSelector)));
    }

    #[test]
    fn coordinate_query_pairs() {
        let selector = LocationSelector::Coordinates {
            lat: 51.5,
            lng: -0.1,
        };
        assert_eq!(
            selector.query_pairs(),
            vec![("lat", "51.5".to_string()), ("lng", "-0.1".to_string())]
        );
    }

    #[test]
    fn units_default_is_metric() {
        assert_eq!(Units::default(), Units::Metric);
    }

    #[test]
    fn units_parse_roundtrip() {
        for units in [Units::Standard, Units::Metric, Units::Imperial] {
            let parsed: Units = units.as_str().parse().expect("roundtrip");
            assert_eq!(parsed, units);
        }
        assert!("kelvin".parse::<Units>().is_err());
    }
}
