//! Error types module
//!
//! All failures surfaced by docgate are unified under the `AppError` enum.
//! Every variant carries a stable machine-readable code and a client-facing
//! message; HTTP conversion lives in the API crate.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like exhausted geocode attempts
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "FORBIDDEN_SCOPE")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields: {0}")]
    MissingField(String),

    #[error("Namespace not configured: {0}")]
    UnsupportedNamespace(String),

    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    #[error("Invalid file type for folder \"{folder}\". Allowed: {allowed}")]
    UnsupportedMimeTypeForFolder { folder: String, allowed: String },

    #[error("Unsupported mimeType: {0}")]
    UnsupportedMimeType(String),

    #[error("File of {size_bytes} bytes exceeds {limit_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Deletion outside temp scope: {}", .offending.join(", "))]
    ForbiddenScope { offending: Vec<String> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Reverse geocoding failed: {0}")]
    GeoResolutionFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
/// Reduces duplication in the ErrorMetadata impl; client_message stays per-variant for dynamic content.
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::MissingField(_) => (
            400,
            "MISSING_FIELD",
            false,
            Some("Provide namespace, folder and mimeType"),
            false,
            LogLevel::Debug,
        ),
        AppError::UnsupportedNamespace(_) => (
            400,
            "UNSUPPORTED_NAMESPACE",
            false,
            Some("Check the namespace against the supported set"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidFolder(_) => (
            400,
            "INVALID_FOLDER",
            false,
            Some("Check the folder against the supported set"),
            false,
            LogLevel::Debug,
        ),
        AppError::UnsupportedMimeTypeForFolder { .. } => (
            400,
            "UNSUPPORTED_MIME_TYPE_FOR_FOLDER",
            false,
            Some("Upload a file of an allowed type for this folder"),
            false,
            LogLevel::Debug,
        ),
        AppError::UnsupportedMimeType(_) => (
            400,
            "UNSUPPORTED_MIME_TYPE",
            false,
            Some("Upload a file of a supported type"),
            false,
            LogLevel::Debug,
        ),
        AppError::FileTooLarge { .. } => (
            400,
            "FILE_TOO_LARGE",
            false,
            Some("Reduce the file size below the limit"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (
            400,
            "INVALID_INPUT",
            false,
            Some("Check request parameters and try again"),
            false,
            LogLevel::Debug,
        ),
        AppError::Unauthorized(_) => (
            401,
            "UNAUTHORIZED",
            false,
            Some("Check the bearer token"),
            false,
            LogLevel::Debug,
        ),
        AppError::ForbiddenScope { .. } => (
            403,
            "FORBIDDEN_SCOPE",
            false,
            Some("Only keys under the temp prefix can be deleted"),
            false,
            LogLevel::Warn,
        ),
        AppError::NotFound(_) => (
            404,
            "NOT_FOUND",
            false,
            Some("Verify the object key exists"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidCoordinates { .. } => (
            400,
            "INVALID_COORDINATES",
            false,
            Some("Latitude must be in [-90, 90] and longitude in [-180, 180]"),
            false,
            LogLevel::Debug,
        ),
        AppError::GeoResolutionFailed(_) => (
            502,
            "GEO_RESOLUTION_FAILED",
            true,
            Some("Retry after a short delay"),
            false,
            LogLevel::Warn,
        ),
        AppError::Storage(_) => (
            500,
            "STORAGE_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::Internal(_) => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::InternalWithSource { .. } => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MissingField",
            AppError::UnsupportedNamespace(_) => "UnsupportedNamespace",
            AppError::InvalidFolder(_) => "InvalidFolder",
            AppError::UnsupportedMimeTypeForFolder { .. } => "UnsupportedMimeTypeForFolder",
            AppError::UnsupportedMimeType(_) => "UnsupportedMimeType",
            AppError::FileTooLarge { .. } => "FileTooLarge",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::ForbiddenScope { .. } => "ForbiddenScope",
            AppError::NotFound(_) => "NotFound",
            AppError::InvalidCoordinates { .. } => "InvalidCoordinates",
            AppError::GeoResolutionFailed(_) => "GeoResolutionFailed",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including the error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingField(ref fields) => {
                format!("Missing required fields: {}", fields)
            }
            AppError::UnsupportedNamespace(ref ns) => format!("Namespace not configured: {}", ns),
            AppError::InvalidFolder(ref folder) => format!(
                "Invalid folder \"{}\". Must be one of: {}",
                folder,
                crate::models::upload::UploadFolder::all_fragments()
            ),
            AppError::UnsupportedMimeTypeForFolder { folder, allowed } => format!(
                "Invalid file type for folder \"{}\". Allowed: {}",
                folder, allowed
            ),
            AppError::UnsupportedMimeType(ref mime) => format!("Unsupported mimeType: {}", mime),
            AppError::FileTooLarge { limit_bytes, .. } => {
                format!("File exceeds {}MB limit", limit_bytes / 1024 / 1024)
            }
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::Unauthorized(ref msg) => msg.clone(),
            AppError::ForbiddenScope { offending } => format!(
                "Deletion only allowed for 'temp-files'. Invalid keys: {}",
                offending.join(", ")
            ),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::InvalidCoordinates { .. } => {
                "Invalid latitude/longitude for reverse geocoding".to_string()
            }
            AppError::GeoResolutionFailed(ref msg) => {
                format!("Reverse geocoding failed: {}", msg)
            }
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}
