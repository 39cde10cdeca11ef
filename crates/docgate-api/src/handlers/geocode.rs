use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use docgate_geo::{Coordinates, GeoLocation};
use std::sync::Arc;

/// Resolve a coordinate pair to a coarse location (country/region/city).
///
/// Uses the provider selected at startup with bounded retry; partial results
/// never come back as a 200.
#[utoipa::path(
    post,
    path = "/api/v1/geocode/reverse",
    tag = "geocode",
    request_body = Coordinates,
    responses(
        (status = 200, description = "Location resolved", body = GeoLocation),
        (status = 400, description = "Invalid coordinates", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 502, description = "Resolution failed after retries", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "reverse_geocode"))]
pub async fn reverse_geocode(
    State(state): State<Arc<AppState>>,
    ValidatedJson(coords): ValidatedJson<Coordinates>,
) -> Result<impl IntoResponse, HttpAppError> {
    let location = state.geo.resolve(coords).await?;
    Ok(Json(location))
}
