//! Docgate Storage Library
//!
//! Storage key policy and the presigning abstraction over the object store.
//!
//! # Storage key format
//!
//! Every key issued for a not-yet-finalized upload lives under the temp prefix:
//!
//! - **With an entity id**: `temp-files/{namespace}/{entity_id}/{folder}/{filename}`
//! - **Without**: `temp-files/{namespace}/{folder}/{filename}`
//!
//! where `{filename}` is `{timestamp_millis}-{uuid}.{ext}`. This string format is
//! the persisted contract external consumers depend on; key generation is
//! centralized in the `keys` module so it cannot drift.

pub mod keys;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use keys::{upload_key, validate_deletion_scope, TEMP_PREFIX};
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
