//! Upload admission check.
//!
//! Pure validation against the fixed policy tables in [`crate::models::upload`].
//! Admission never issues credentials; on success the caller performs that as a
//! separate explicit step with the normalized values returned here.

use crate::error::AppError;
use crate::models::upload::{FileMimeType, Namespace, UploadFolder};

/// Normalized output of a successful admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmittedUpload {
    pub namespace: Namespace,
    pub folder: UploadFolder,
    pub mime: FileMimeType,
}

/// Validate an upload request against the policy tables.
///
/// Validation order, first failure wins:
/// presence, namespace, folder, MIME-for-folder, declared size.
pub fn admit(
    namespace: Option<&str>,
    folder: Option<&str>,
    mime_type: Option<&str>,
    filesize: Option<u64>,
    max_size_bytes: u64,
) -> Result<AdmittedUpload, AppError> {
    let mut missing = Vec::new();
    if namespace.map_or(true, str::is_empty) {
        missing.push("namespace");
    }
    if folder.map_or(true, str::is_empty) {
        missing.push("folder");
    }
    if mime_type.map_or(true, str::is_empty) {
        missing.push("mimeType");
    }
    if !missing.is_empty() {
        return Err(AppError::MissingField(missing.join(", ")));
    }

    let (namespace, folder, mime_type) = (
        namespace.unwrap_or_default(),
        folder.unwrap_or_default(),
        mime_type.unwrap_or_default(),
    );

    let namespace = Namespace::parse(namespace)
        .ok_or_else(|| AppError::UnsupportedNamespace(namespace.to_string()))?;

    let folder =
        UploadFolder::parse(folder).ok_or_else(|| AppError::InvalidFolder(folder.to_string()))?;

    let allowed = folder.allowed_mime_types();
    let mime = FileMimeType::parse(mime_type)
        .filter(|m| allowed.contains(m))
        .ok_or_else(|| AppError::UnsupportedMimeTypeForFolder {
            folder: folder.as_str().to_string(),
            allowed: allowed
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    if let Some(size) = filesize {
        if size > max_size_bytes {
            return Err(AppError::FileTooLarge {
                size_bytes: size,
                limit_bytes: max_size_bytes,
            });
        }
    }

    Ok(AdmittedUpload {
        namespace,
        folder,
        mime,
    })
}
