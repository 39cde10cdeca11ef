//! Application state shared across handlers.

use docgate_core::Config;
use docgate_geo::GeoResolver;
use docgate_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub geo: Arc<GeoResolver>,
}
