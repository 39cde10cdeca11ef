use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use docgate_core::models::upload::{PresignDownloadRequest, PresignDownloadResponse};
use docgate_core::AppError;
use std::sync::Arc;
use std::time::Duration;

/// Default lifetime of a presigned GET URL.
const DEFAULT_DOWNLOAD_URL_EXPIRY_SECS: u64 = 900;
/// S3 rejects presigned URLs valid for longer than 7 days.
const MAX_DOWNLOAD_URL_EXPIRY_SECS: u64 = 604_800;

/// Issue a short-lived presigned GET URL for an existing object.
///
/// Existence is checked first so a missing object surfaces as a 404 instead of
/// an opaque store error on the signed URL.
#[utoipa::path(
    post,
    path = "/api/v1/presign/download",
    tag = "presign",
    request_body = PresignDownloadRequest,
    responses(
        (status = 200, description = "Presigned GET URL generated", body = PresignDownloadResponse),
        (status = 400, description = "Missing or invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Object not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "presign_download"))]
pub async fn presign_download(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<PresignDownloadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let key = request
        .key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing or invalid 'key'".to_string()))?;

    let disposition = match request.disposition.as_deref() {
        None => None,
        Some(d @ ("inline" | "attachment")) => Some(d),
        Some(_) => {
            return Err(AppError::InvalidInput(
                "Invalid 'disposition' (expected 'inline' or 'attachment')".to_string(),
            )
            .into());
        }
    };

    if !state.storage.exists(key).await? {
        return Err(AppError::NotFound("Object not found".to_string()).into());
    }

    let content_disposition =
        content_disposition_header(disposition, request.filename.as_deref(), key);
    let expires_in = request
        .expires_in
        .unwrap_or(DEFAULT_DOWNLOAD_URL_EXPIRY_SECS)
        .clamp(1, MAX_DOWNLOAD_URL_EXPIRY_SECS);

    let url = state
        .storage
        .presigned_get_url(
            key,
            Duration::from_secs(expires_in),
            content_disposition.as_deref(),
        )
        .await?;

    tracing::info!(key = %key, expires_in_secs = expires_in, "Issued presigned download URL");

    Ok(Json(PresignDownloadResponse {
        url,
        expires_in: request.expires_in,
    }))
}

/// Build the response Content-Disposition override, if the caller asked for one.
///
/// A filename without an extension gets the key's extension appended; a
/// disposition without a filename gets the filename derived from the key.
fn content_disposition_header(
    disposition: Option<&str>,
    filename: Option<&str>,
    key: &str,
) -> Option<String> {
    if disposition.is_none() && filename.is_none() {
        return None;
    }

    let key_filename = key.rsplit('/').next().unwrap_or(key);
    let name = match filename.map(str::trim).filter(|f| !f.is_empty()) {
        Some(name) => filename_with_extension(name, key_filename),
        None => key_filename.to_string(),
    };
    let name: String = name
        .chars()
        .filter(|c| *c != '"' && !c.is_control())
        .collect();

    Some(format!(
        "{}; filename=\"{}\"",
        disposition.unwrap_or("attachment"),
        name
    ))
}

fn filename_with_extension(filename: &str, key_filename: &str) -> String {
    if filename.contains('.') {
        return filename.to_string();
    }
    match key_filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", filename, ext),
        _ => filename.to_string(),
    }
}
