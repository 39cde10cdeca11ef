//! Mapbox reverse geocoding (primary provider, token required).

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::resolver::ReverseGeocoder;
use crate::types::{non_empty, Coordinates, GeoError, GeoLocation};

const PLACES_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
const PROVIDER: &str = "mapbox";

pub struct MapboxGeocoder {
    client: reqwest::Client,
    access_token: String,
}

impl MapboxGeocoder {
    pub fn new(access_token: String, timeout: Duration) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeoError::Provider {
                provider: PROVIDER,
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            access_token,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    place_type: Vec<String>,
    text: Option<String>,
}

impl FeatureCollection {
    /// Mapbox returns multiple features; pick the best match per place type.
    fn text_for(&self, place_type: &str) -> Option<String> {
        self.features
            .iter()
            .find(|f| f.place_type.iter().any(|t| t == place_type))
            .and_then(|f| non_empty(f.text.clone()))
    }
}

#[async_trait]
impl ReverseGeocoder for MapboxGeocoder {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn reverse(&self, coords: Coordinates) -> Result<GeoLocation, GeoError> {
        let url = format!("{}/{},{}.json", PLACES_URL, coords.longitude, coords.latitude);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_token", self.access_token.as_str()),
                ("types", "place,region,country"),
                ("language", "en"),
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

        let collection: FeatureCollection =
            response.json().await.map_err(|e| GeoError::Provider {
                provider: PROVIDER,
                message: format!("invalid response body: {}", e),
            })?;

        let country = collection.text_for("country");
        let region = collection.text_for("region");
        let city = collection.text_for("place");

        match (country, region, city) {
            (Some(country), Some(region), Some(city)) => Ok(GeoLocation {
                country,
                region,
                city,
            }),
            _ => Err(GeoError::Provider {
                provider: PROVIDER,
                message: "response missing country/region/city".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_features_by_place_type() {
        let collection: FeatureCollection = serde_json::from_str(
            r#"{
                "features": [
                    {"place_type": ["place"], "text": "Milton"},
                    {"place_type": ["region"], "text": "Ontario"},
                    {"place_type": ["country"], "text": "Canada"},
                    {"place_type": ["postcode"], "text": "L9T"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(collection.text_for("country"), Some("Canada".to_string()));
        assert_eq!(collection.text_for("region"), Some("Ontario".to_string()));
        assert_eq!(collection.text_for("place"), Some("Milton".to_string()));
        assert_eq!(collection.text_for("district"), None);
    }

    #[test]
    fn blank_feature_text_counts_as_absent() {
        let collection: FeatureCollection = serde_json::from_str(
            r#"{"features": [{"place_type": ["country"], "text": "  "}]}"#,
        )
        .unwrap();
        assert_eq!(collection.text_for("country"), None);
    }

    #[test]
    fn tolerates_missing_features_array() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert_eq!(collection.text_for("country"), None);
    }
}
