//! Docgate Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! upload admission check shared across all docgate components.

pub mod admission;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use admission::{admit, AdmittedUpload};
pub use config::{BaseConfig, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::upload::{FileMimeType, Namespace, UploadFolder};
