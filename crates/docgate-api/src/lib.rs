//! Docgate API
//!
//! HTTP surface for upload admission, presigned download credentials, temp-file
//! deletion, and reverse geocoding. Handlers return
//! `Result<impl IntoResponse, HttpAppError>`; see `error` for the response shape.

pub mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
