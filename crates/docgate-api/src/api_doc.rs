//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use docgate_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docgate API",
        version = "0.1.0",
        description = "Upload admission and presigned-credential API. Clients request permission to upload one file; admitted requests receive a short-lived presigned PUT URL scoped to the temp key space. Download credentials, temp-file deletion, and reverse geocoding round out the surface. All endpoints are versioned under /api/v1/."
    ),
    paths(
        handlers::presign_upload::presign_upload,
        handlers::presign_download::presign_download,
        handlers::temp_files::delete_temp_files,
        handlers::geocode::reverse_geocode,
    ),
    components(schemas(
        models::upload::PresignUploadRequest,
        models::upload::PresignUploadResponse,
        models::upload::PresignDownloadRequest,
        models::upload::PresignDownloadResponse,
        models::upload::DeleteTempFilesRequest,
        models::upload::DeleteTempFilesResponse,
        docgate_geo::Coordinates,
        docgate_geo::GeoLocation,
        error::ErrorResponse,
    )),
    tags(
        (name = "presign", description = "Upload admission and download credentials"),
        (name = "temp-files", description = "Bulk deletion inside the temp key space"),
        (name = "geocode", description = "Reverse geocoding with provider fallback")
    )
)]
pub struct ApiDoc;
