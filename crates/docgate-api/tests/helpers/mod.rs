//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p docgate-api` or
//! `cargo test -p docgate-api --test presign_upload_test`.

pub mod geo;
pub mod storage;

use axum_test::TestServer;
use docgate_api::setup::routes::setup_routes;
use docgate_api::state::AppState;
use docgate_core::{BaseConfig, Config};
use docgate_geo::GeoResolver;
use docgate_storage::Storage;
use std::sync::Arc;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

/// Test application: server plus the mock storage for assertions.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<storage::MockStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    Config {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        },
        s3_bucket: "docgate-test".to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        max_upload_size_bytes: 20 * 1024 * 1024,
        upload_url_expiry_secs: 900,
        admin_tokens: vec![TEST_ADMIN_TOKEN.to_string()],
        auth_disabled: false,
        mapbox_access_token: None,
        geocode_timeout_secs: 6,
        geocode_attempts: 2,
    }
}

/// Setup a test app with mock storage and a fixed geocoder.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config())
}

pub fn setup_test_app_with(config: Config) -> TestApp {
    let mock = Arc::new(storage::MockStorage::default());
    let storage: Arc<dyn Storage> = mock.clone();
    let geo = Arc::new(GeoResolver::new(
        Arc::new(geo::FixedGeocoder::default()),
        config.geocode_attempts,
    ));

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        geo,
    });

    let router = setup_routes(&config, state).expect("failed to build router");
    TestApp {
        server: TestServer::new(router).expect("failed to start test server"),
        storage: mock,
    }
}

pub fn auth_header() -> String {
    format!("Bearer {}", TEST_ADMIN_TOKEN)
}
