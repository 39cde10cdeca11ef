use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use docgate_core::admission::admit;
use docgate_core::models::upload::{PresignUploadRequest, PresignUploadResponse};
use docgate_storage::keys;
use std::sync::Arc;
use std::time::Duration;

/// Issue a short-lived presigned PUT URL for one upload.
///
/// Admission runs first against the fixed policy tables; only then is the temp
/// key computed and the store asked for a credential. The client performs the
/// actual transfer directly against the store.
#[utoipa::path(
    post,
    path = "/api/v1/presign/upload",
    tag = "presign",
    request_body = PresignUploadRequest,
    responses(
        (status = 200, description = "Presigned URL generated", body = PresignUploadResponse),
        (status = 400, description = "Admission rejected", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(
        namespace = ?request.namespace,
        folder = ?request.folder,
        operation = "presign_upload"
    )
)]
pub async fn presign_upload(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<PresignUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let admitted = admit(
        request.namespace.as_deref(),
        request.folder.as_deref(),
        request.mime_type.as_deref(),
        request.filesize,
        state.config.max_upload_size_bytes,
    )?;

    let key = keys::upload_key(
        admitted.namespace,
        admitted.folder,
        admitted.mime,
        request.doc_id.as_deref(),
    )?;

    let expires_in = state.config.upload_url_expiry_secs;
    let url = state
        .storage
        .presigned_put_url(&key, admitted.mime.as_str(), Duration::from_secs(expires_in))
        .await?;
    let public_url = state.storage.public_url(&key);

    tracing::info!(
        key = %key,
        mime_type = %admitted.mime,
        expires_in_secs = expires_in,
        "Issued presigned upload URL"
    );

    Ok(Json(PresignUploadResponse {
        key,
        url,
        public_url,
        expires_in,
        mime_type: admitted.mime.as_str().to_string(),
    }))
}
