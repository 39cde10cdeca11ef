//! Storage key policy.
//!
//! Computes canonical keys for new uploads and enforces the temp-namespace
//! boundary before bulk deletion. The temp prefix is the sole authorization
//! boundary for destructive operations.

use chrono::Utc;
use uuid::Uuid;

use docgate_core::error::AppError;
use docgate_core::models::upload::{FileMimeType, Namespace, UploadFolder};

/// Reserved key-space root for not-yet-finalized uploads.
pub const TEMP_PREFIX: &str = "temp-files";

/// Compute the storage key for a new temp upload.
///
/// Shape: `temp-files/{namespace}/[{entity_id}/]{folder}/{timestamp}-{uuid}.{ext}`.
/// The entity-id segment is present iff `entity_id` is non-empty after trimming.
pub fn upload_key(
    namespace: Namespace,
    folder: UploadFolder,
    mime: FileMimeType,
    entity_id: Option<&str>,
) -> Result<String, AppError> {
    let ext = mime
        .extension()
        .ok_or_else(|| AppError::UnsupportedMimeType(mime.as_str().to_string()))?;

    let filename = format!("{}-{}.{}", Utc::now().timestamp_millis(), Uuid::new_v4(), ext);

    let entity_id = entity_id.map(str::trim).filter(|id| !id.is_empty());
    let key = match entity_id {
        Some(id) => format!(
            "{}/{}/{}/{}/{}",
            TEMP_PREFIX,
            namespace.as_str(),
            id,
            folder.as_str(),
            filename
        ),
        None => format!(
            "{}/{}/{}/{}",
            TEMP_PREFIX,
            namespace.as_str(),
            folder.as_str(),
            filename
        ),
    };

    Ok(key)
}

/// Check that every key in a deletion batch lives under the temp prefix.
///
/// Any out-of-scope key rejects the whole batch; partial deletion is never
/// attempted. The error enumerates every offending key.
pub fn validate_deletion_scope(keys: &[String]) -> Result<(), AppError> {
    let scope = format!("{}/", TEMP_PREFIX);
    let offending: Vec<String> = keys
        .iter()
        .filter(|key| !key.starts_with(&scope))
        .cloned()
        .collect();

    if offending.is_empty() {
        Ok(())
    } else {
        Err(AppError::ForbiddenScope { offending })
    }
}
