//! Domain models

pub mod upload;

pub use upload::{
    DeleteTempFilesRequest, DeleteTempFilesResponse, FileMimeType, Namespace,
    PresignDownloadRequest, PresignDownloadResponse, PresignUploadRequest, PresignUploadResponse,
    UploadFolder,
};
