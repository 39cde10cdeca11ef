//! Geo-resolution types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A coordinate pair as submitted by the client.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, ToSchema)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Both components must be finite and within range. Checked before any
    /// network call is made.
    pub fn validate(&self) -> Result<(), GeoError> {
        let in_range = self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude);
        if in_range {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinates {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// A complete coarse location. Produced only when the provider returned all
/// three fields non-empty; partial results are treated as a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeoLocation {
    /// Full country name (e.g. "Canada", "United States")
    pub country: String,
    /// State or province (e.g. "Ontario", "California")
    pub region: String,
    /// City name (e.g. "Milton", "Los Angeles")
    pub city: String,
}

/// Geo-resolution errors
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("{provider}: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} failed after {attempts} attempts: {last}")]
    Exhausted {
        provider: &'static str,
        attempts: u32,
        last: String,
    },
}

/// A string field counts only when non-empty after trimming.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_range_boundaries() {
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0), (43.5, -79.9)] {
            assert!(Coordinates {
                latitude: lat,
                longitude: lng
            }
            .validate()
            .is_ok());
        }
    }

    #[test]
    fn validate_rejects_out_of_range() {
        for (lat, lng) in [(91.0, 0.0), (-90.1, 0.0), (0.0, 180.5), (0.0, -181.0)] {
            assert!(Coordinates {
                latitude: lat,
                longitude: lng
            }
            .validate()
            .is_err());
        }
    }

    #[test]
    fn validate_rejects_non_finite() {
        for (lat, lng) in [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ] {
            assert!(Coordinates {
                latitude: lat,
                longitude: lng
            }
            .validate()
            .is_err());
        }
    }

    #[test]
    fn non_empty_filters_blank_strings() {
        assert_eq!(non_empty(Some("Milton".into())), Some("Milton".to_string()));
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(None), None);
    }
}
