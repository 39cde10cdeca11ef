//! Docgate Geo Library
//!
//! Reverse geocoding with a primary provider (Mapbox, token required) and a
//! keyless secondary provider (BigDataCloud). Provider selection happens once
//! when the resolver is built; the retry loop never falls across providers.

pub mod bigdatacloud;
pub mod mapbox;
pub mod resolver;
pub mod types;

// Re-export commonly used types
pub use bigdatacloud::BigDataCloudGeocoder;
pub use mapbox::MapboxGeocoder;
pub use resolver::{GeoResolver, ReverseGeocoder};
pub use types::{Coordinates, GeoError, GeoLocation};
