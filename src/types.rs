use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GeocodeError;

/// Status strings the geocoding service reports in the `status` field.
pub mod status {
    pub const OK: &str = "OK";
    pub const ZERO_RESULTS: &str = "ZERO_RESULTS";
    pub const OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";
    pub const REQUEST_DENIED: &str = "REQUEST_DENIED";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";
}

/// A latitude/longitude pair for reverse geocoding.
///
/// Validation happens at the operation boundary: components must be finite
/// and non-zero, matching the service client contract where an empty, zero,
/// or missing component never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a coordinate from its loose string form. Empty or non-numeric
    /// components are rejected as invalid input.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, GeocodeError> {
        let latitude = latitude
            .trim()
            .parse::<f64>()
            .map_err(|_| GeocodeError::invalid_coordinates())?;
        let longitude = longitude
            .trim()
            .parse::<f64>()
            .map_err(|_| GeocodeError::invalid_coordinates())?;
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub(crate) fn validate(&self) -> Result<(), GeocodeError> {
        let valid = |v: f64| v.is_finite() && v != 0.0;
        if valid(self.latitude) && valid(self.longitude) {
            Ok(())
        } else {
            Err(GeocodeError::invalid_coordinates())
        }
    }

    /// The `"<lat>,<lng>"` form the service expects in the `latlng` query
    /// parameter, before percent-encoding.
    pub(crate) fn as_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// A resolved location, as nested under `geometry.location` in results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Full decoded response body from the geocoding service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One result item. Only the `geometry.location` access path is typed; every
/// other field the service returns is kept verbatim in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Location,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
