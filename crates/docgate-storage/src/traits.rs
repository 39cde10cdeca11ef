//! Storage abstraction trait
//!
//! The credential-issuance contract the service consumes. Signing, transport,
//! and expiry enforcement belong to the external store; this trait only wraps
//! its operations.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Presigning and object-management contract against the object store.
///
/// Implemented by [`crate::s3::S3Storage`]; tests substitute a mock. All
/// operations are request-scoped and stateless on the server side; the store
/// itself enforces credential expiry.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Generate a presigned PUT URL authorizing exactly one upload of an
    /// object at `key` with the given content type enforced by the store.
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Generate a presigned GET URL for an existing object. Callers must
    /// check [`Storage::exists`] first; this method does not.
    ///
    /// `content_disposition` overrides the response disposition header
    /// (e.g. `attachment; filename="report.pdf"`).
    async fn presigned_get_url(
        &self,
        key: &str,
        expires_in: Duration,
        content_disposition: Option<&str>,
    ) -> StorageResult<String>;

    /// Check if an object exists (HEAD).
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Best-effort bulk delete. Callers are responsible for scoping the batch
    /// with [`crate::keys::validate_deletion_scope`] first.
    async fn delete_objects(&self, keys: &[String]) -> StorageResult<()>;

    /// Long-lived public URL for an object, suitable for persisting in asset
    /// metadata.
    fn public_url(&self, key: &str) -> String;
}
