pub mod geocode;
pub mod health;
pub mod presign_download;
pub mod presign_upload;
pub mod temp_files;
