use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use docgate_core::models::upload::{DeleteTempFilesRequest, DeleteTempFilesResponse};
use docgate_core::AppError;
use docgate_storage::keys;
use std::sync::Arc;

/// Bulk-delete objects under the temp prefix.
///
/// Strictly limited to the temp key space: one out-of-scope key rejects the
/// whole batch before anything is deleted.
#[utoipa::path(
    post,
    path = "/api/v1/temp-files/delete",
    tag = "temp-files",
    request_body = DeleteTempFilesRequest,
    responses(
        (status = 200, description = "Temp file(s) deleted", body = DeleteTempFilesResponse),
        (status = 400, description = "Missing or invalid 'keys'", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "One or more keys outside the temp scope", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "delete_temp_files"))]
pub async fn delete_temp_files(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<DeleteTempFilesRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let keys = request.keys.unwrap_or_default();
    if keys.is_empty() {
        return Err(AppError::InvalidInput(
            "Invalid or missing 'keys'. Expected: string[]".to_string(),
        )
        .into());
    }

    keys::validate_deletion_scope(&keys)?;

    state.storage.delete_objects(&keys).await?;

    tracing::info!(key_count = keys.len(), "Deleted temp files");

    Ok(Json(DeleteTempFilesResponse {
        deleted: keys.len(),
    }))
}
