//! Fixed geocoder for endpoint tests.

use async_trait::async_trait;
use docgate_geo::{Coordinates, GeoError, GeoLocation, ReverseGeocoder};

/// Always resolves to the same location.
#[derive(Default)]
pub struct FixedGeocoder;

#[async_trait]
impl ReverseGeocoder for FixedGeocoder {
    fn provider(&self) -> &'static str {
        "fixed"
    }

    async fn reverse(&self, _coords: Coordinates) -> Result<GeoLocation, GeoError> {
        Ok(GeoLocation {
            country: "Canada".to_string(),
            region: "Ontario".to_string(),
            city: "Milton".to_string(),
        })
    }
}
