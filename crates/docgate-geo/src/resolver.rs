//! Resolver selection and the bounded attempt loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::types::{Coordinates, GeoError, GeoLocation};

/// Backoff step between failed attempts; attempt N waits N × this.
const BACKOFF_STEP: Duration = Duration::from_millis(200);

/// A single reverse-geocoding provider.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Provider name for logs and error messages.
    fn provider(&self) -> &'static str;

    /// One resolution attempt. Implementations own their network timeout and
    /// must return an error for incomplete results.
    async fn reverse(&self, coords: Coordinates) -> Result<GeoLocation, GeoError>;
}

/// Runs the selected provider with a bounded retry loop.
///
/// The provider is chosen once at construction; a call never falls through to
/// a different provider mid-flight.
pub struct GeoResolver {
    geocoder: Arc<dyn ReverseGeocoder>,
    attempts: u32,
}

impl GeoResolver {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>, attempts: u32) -> Self {
        Self {
            geocoder,
            attempts: attempts.max(1),
        }
    }

    pub fn provider(&self) -> &'static str {
        self.geocoder.provider()
    }

    /// Resolve a coordinate pair to a complete coarse location.
    ///
    /// Invalid coordinates fail immediately with zero network calls. Failed
    /// attempts back off `200ms × attempt_number` before the next; exhausting
    /// every attempt surfaces the last underlying error.
    #[tracing::instrument(skip(self), fields(provider = self.geocoder.provider()))]
    pub async fn resolve(&self, coords: Coordinates) -> Result<GeoLocation, GeoError> {
        coords.validate()?;

        let mut last_error: Option<GeoError> = None;
        for attempt in 1..=self.attempts {
            match self.geocoder.reverse(coords).await {
                Ok(location) => {
                    tracing::debug!(attempt, ?location, "Reverse geocode succeeded");
                    return Ok(location);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        attempts = self.attempts,
                        error = %e,
                        "Reverse geocode attempt failed"
                    );
                    last_error = Some(e);
                    if attempt < self.attempts {
                        tokio::time::sleep(BACKOFF_STEP * attempt).await;
                    }
                }
            }
        }

        Err(GeoError::Exhausted {
            provider: self.geocoder.provider(),
            attempts: self.attempts,
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempts made".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Scripted geocoder: fails the first `fail_first` calls, then succeeds.
    struct ScriptedGeocoder {
        calls: AtomicU32,
        fail_first: u32,
    }

    impl ScriptedGeocoder {
        fn failing_first(fail_first: u32) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_first,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReverseGeocoder for ScriptedGeocoder {
        fn provider(&self) -> &'static str {
            "scripted"
        }

        async fn reverse(&self, _coords: Coordinates) -> Result<GeoLocation, GeoError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                Err(GeoError::Provider {
                    provider: "scripted",
                    message: format!("simulated failure {}", call + 1),
                })
            } else {
                Ok(GeoLocation {
                    country: "Canada".to_string(),
                    region: "Ontario".to_string(),
                    city: "Milton".to_string(),
                })
            }
        }
    }

    fn valid_coords() -> Coordinates {
        Coordinates {
            latitude: 43.5,
            longitude: -79.9,
        }
    }

    #[tokio::test]
    async fn invalid_coordinates_fail_without_any_attempt() {
        let geocoder = Arc::new(ScriptedGeocoder::failing_first(0));
        let resolver = GeoResolver::new(geocoder.clone(), 2);

        let err = resolver
            .resolve(Coordinates {
                latitude: 91.0,
                longitude: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GeoError::InvalidCoordinates { .. }));
        assert_eq!(geocoder.calls(), 0);
    }

    #[tokio::test]
    async fn first_attempt_success_makes_one_call() {
        let geocoder = Arc::new(ScriptedGeocoder::failing_first(0));
        let resolver = GeoResolver::new(geocoder.clone(), 2);

        let location = resolver.resolve(valid_coords()).await.unwrap();
        assert_eq!(location.city, "Milton");
        assert_eq!(geocoder.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retries_once_then_succeeds() {
        let geocoder = Arc::new(ScriptedGeocoder::failing_first(1));
        let resolver = GeoResolver::new(geocoder.clone(), 2);

        let location = resolver.resolve(valid_coords()).await.unwrap();
        assert_eq!(location.country, "Canada");
        assert_eq!(geocoder.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_attempts_surface_last_error() {
        let geocoder = Arc::new(ScriptedGeocoder::failing_first(u32::MAX));
        let resolver = GeoResolver::new(geocoder.clone(), 2);

        let err = resolver.resolve(valid_coords()).await.unwrap_err();
        match err {
            GeoError::Exhausted {
                provider,
                attempts,
                last,
            } => {
                assert_eq!(provider, "scripted");
                assert_eq!(attempts, 2);
                assert!(last.contains("simulated failure 2"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        // Attempts bounded at 2 for the selected provider; no cross-provider fallback.
        assert_eq!(geocoder.calls(), 2);
    }
}
