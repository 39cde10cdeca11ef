//! Application setup and initialization
//!
//! All initialization logic lives here instead of main.rs so integration tests
//! can assemble the router with substitute components.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use docgate_core::Config;
use docgate_geo::{BigDataCloudGeocoder, GeoResolver, MapboxGeocoder, ReverseGeocoder};
use docgate_storage::{S3Storage, Storage};
use std::sync::Arc;
use std::time::Duration;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize telemetry first
    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded and validated successfully");

    // Setup storage
    let storage: Arc<dyn Storage> = Arc::new(
        S3Storage::new(
            config.s3_bucket.clone(),
            config.s3_region.clone(),
            config.s3_endpoint.clone(),
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build S3 storage: {}", e))?,
    );

    // Setup reverse geocoding
    let geo = Arc::new(build_geo_resolver(&config)?);

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        geo,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// Select the reverse-geocoding provider.
///
/// Mapbox when a token is configured, otherwise the keyless BigDataCloud
/// endpoint. Selected once here; the resolver never switches mid-call.
pub fn build_geo_resolver(config: &Config) -> Result<GeoResolver> {
    let timeout = Duration::from_secs(config.geocode_timeout_secs);
    let geocoder: Arc<dyn ReverseGeocoder> = match &config.mapbox_access_token {
        Some(token) => Arc::new(MapboxGeocoder::new(token.clone(), timeout)?),
        None => Arc::new(BigDataCloudGeocoder::new(timeout)?),
    };

    tracing::info!(
        provider = geocoder.provider(),
        attempts = config.geocode_attempts,
        timeout_secs = config.geocode_timeout_secs,
        "Selected reverse geocoding provider"
    );

    Ok(GeoResolver::new(geocoder, config.geocode_attempts))
}
