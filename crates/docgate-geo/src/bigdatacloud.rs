//! BigDataCloud reverse geocoding (secondary provider, no credential required).

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::resolver::ReverseGeocoder;
use crate::types::{non_empty, Coordinates, GeoError, GeoLocation};

const REVERSE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";
const PROVIDER: &str = "bigdatacloud";

pub struct BigDataCloudGeocoder {
    client: reqwest::Client,
}

impl BigDataCloudGeocoder {
    pub fn new(timeout: Duration) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeoError::Provider {
                provider: PROVIDER,
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseResponse {
    country_name: Option<String>,
    principal_subdivision: Option<String>,
    city: Option<String>,
    locality: Option<String>,
}

impl ReverseResponse {
    fn into_location(self) -> Option<GeoLocation> {
        let country = non_empty(self.country_name)?;
        let region = non_empty(self.principal_subdivision)?;
        // Rural coordinates often come back with an empty city but a locality.
        let city = non_empty(self.city).or_else(|| non_empty(self.locality))?;
        Some(GeoLocation {
            country,
            region,
            city,
        })
    }
}

#[async_trait]
impl ReverseGeocoder for BigDataCloudGeocoder {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn reverse(&self, coords: Coordinates) -> Result<GeoLocation, GeoError> {
        let response = self
            .client
            .get(REVERSE_URL)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("localityLanguage", "en".to_string()),
            ])
            .send()
            .await
            .map_err(|e| GeoError::Provider {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(GeoError::Provider {
                provider: PROVIDER,
                message: format!("HTTP {}", response.status()),
            });
        }

        let body: ReverseResponse = response.json().await.map_err(|e| GeoError::Provider {
            provider: PROVIDER,
            message: format!("invalid response body: {}", e),
        })?;

        body.into_location().ok_or(GeoError::Provider {
            provider: PROVIDER,
            message: "response missing country/region/city".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_response_maps_to_location() {
        let body: ReverseResponse = serde_json::from_str(
            r#"{
                "countryName": "Canada",
                "principalSubdivision": "Ontario",
                "city": "Milton",
                "locality": "Milton Heights"
            }"#,
        )
        .unwrap();
        let location = body.into_location().unwrap();
        assert_eq!(location.country, "Canada");
        assert_eq!(location.region, "Ontario");
        assert_eq!(location.city, "Milton");
    }

    #[test]
    fn locality_backfills_empty_city() {
        let body: ReverseResponse = serde_json::from_str(
            r#"{
                "countryName": "Canada",
                "principalSubdivision": "Ontario",
                "city": "",
                "locality": "Campbellville"
            }"#,
        )
        .unwrap();
        assert_eq!(body.into_location().unwrap().city, "Campbellville");
    }

    #[test]
    fn partial_response_is_rejected() {
        let body: ReverseResponse = serde_json::from_str(
            r#"{"countryName": "Canada", "city": "Milton"}"#,
        )
        .unwrap();
        assert!(body.into_location().is_none());
    }
}
