//! Configuration module
//!
//! Configuration is read once at startup into an explicit struct and passed by
//! reference into the components that need it; nothing looks up environment
//! variables at request time.

use std::env;

use anyhow::{bail, Context};

/// Global upload size ceiling: 20 MiB, boundary inclusive.
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// Default lifetime of a presigned URL: 15 minutes.
pub const DEFAULT_UPLOAD_URL_EXPIRY_SECS: u64 = 900;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 6;
const DEFAULT_GEOCODE_ATTEMPTS: u32 = 2;

/// Base configuration shared by every deployment flavor
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    // Object storage
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    // Upload policy
    pub max_upload_size_bytes: u64,
    pub upload_url_expiry_secs: u64,
    // Admin gate
    pub admin_tokens: Vec<String>,
    pub auth_disabled: bool,
    // Reverse geocoding
    pub mapbox_access_token: Option<String>,
    pub geocode_timeout_secs: u64,
    pub geocode_attempts: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let base = BaseConfig {
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            cors_origins: parse_list(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into())),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        };

        let max_upload_size_mb: u64 =
            parse_env("MAX_UPLOAD_SIZE_MB", DEFAULT_MAX_UPLOAD_SIZE_BYTES / 1024 / 1024)?;

        Ok(Config {
            base,
            s3_bucket: env::var("S3_BUCKET").context("S3_BUCKET is required")?,
            s3_region: env::var("S3_REGION").context("S3_REGION is required")?,
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            upload_url_expiry_secs: parse_env(
                "UPLOAD_URL_EXPIRY_SECS",
                DEFAULT_UPLOAD_URL_EXPIRY_SECS,
            )?,
            admin_tokens: parse_list(&env::var("ADMIN_API_TOKENS").unwrap_or_default()),
            auth_disabled: env::var("AUTH_DISABLED").map(|v| v == "true").unwrap_or(false),
            mapbox_access_token: env::var("MAPBOX_ACCESS_TOKEN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            geocode_timeout_secs: parse_env("GEOCODE_TIMEOUT_SECS", DEFAULT_GEOCODE_TIMEOUT_SECS)?,
            geocode_attempts: parse_env("GEOCODE_ATTEMPTS", DEFAULT_GEOCODE_ATTEMPTS)?,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Fail fast on misconfiguration. Called once at startup.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.s3_bucket.trim().is_empty() {
            bail!("S3_BUCKET must not be empty");
        }
        if self.s3_region.trim().is_empty() {
            bail!("S3_REGION must not be empty");
        }
        if self.auth_disabled && self.is_production() {
            bail!("AUTH_DISABLED=true is not allowed in production");
        }
        if !self.auth_disabled && self.admin_tokens.is_empty() {
            bail!("ADMIN_API_TOKENS is required when auth is enabled");
        }
        if self.geocode_attempts == 0 {
            bail!("GEOCODE_ATTEMPTS must be at least 1");
        }
        Ok(())
    }
}

/// Parse an env var with a default, failing on unparseable values rather than
/// silently ignoring them.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated list, trimming entries and dropping empties.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            base: BaseConfig {
                server_port: 8080,
                cors_origins: vec!["*".to_string()],
                environment: "development".to_string(),
            },
            s3_bucket: "docgate-test".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_endpoint: None,
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            upload_url_expiry_secs: DEFAULT_UPLOAD_URL_EXPIRY_SECS,
            admin_tokens: vec!["token-1".to_string()],
            auth_disabled: false,
            mapbox_access_token: None,
            geocode_timeout_secs: DEFAULT_GEOCODE_TIMEOUT_SECS,
            geocode_attempts: DEFAULT_GEOCODE_ATTEMPTS,
        }
    }

    #[test]
    fn parse_list_trims_and_drops_empties() {
        assert_eq!(
            parse_list(" a , b ,, c,"),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_bucket() {
        let mut config = test_config();
        config.s3_bucket = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_auth_disabled_in_production() {
        let mut config = test_config();
        config.auth_disabled = true;
        config.base.environment = "production".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_requires_tokens_when_auth_enabled() {
        let mut config = test_config();
        config.admin_tokens.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn auth_disabled_outside_production_is_accepted() {
        let mut config = test_config();
        config.auth_disabled = true;
        config.admin_tokens.clear();
        assert!(config.validate().is_ok());
    }
}
