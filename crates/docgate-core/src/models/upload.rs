//! Upload policy tables and wire types.
//!
//! Namespaces, upload folders, and MIME types are closed enumerations so that
//! invalid values are unrepresentable past the admission check. Adding a
//! namespace or folder is a one-place edit here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level storage namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Blogs,
}

impl Namespace {
    pub const ALL: &'static [Namespace] = &[Namespace::Blogs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Blogs => "blogs",
        }
    }

    /// Parse a client-supplied namespace value. Case-sensitive: the wire
    /// contract uses the exact lowercase fragment.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ns| ns.as_str() == value)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical folder fragments (no namespace or entity ids inside).
///
/// These align with the onboarding sections: government IDs, bank documents,
/// education and employment history, and the final declaration/signature step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFolder {
    GovAadhaar,
    GovPan,
    GovPassport,
    GovDriversLicense,
    GovSin,
    GovSsn,
    GovPrCard,
    GovGreenCard,
    GovWorkPermit,
    BankVoidCheque,
    BankDirectDeposit,
    BankVoidChequeOrDepositSlip,
    Education,
    EmploymentCertificates,
    DeclarationSignature,
}

impl UploadFolder {
    pub const ALL: &'static [UploadFolder] = &[
        UploadFolder::GovAadhaar,
        UploadFolder::GovPan,
        UploadFolder::GovPassport,
        UploadFolder::GovDriversLicense,
        UploadFolder::GovSin,
        UploadFolder::GovSsn,
        UploadFolder::GovPrCard,
        UploadFolder::GovGreenCard,
        UploadFolder::GovWorkPermit,
        UploadFolder::BankVoidCheque,
        UploadFolder::BankDirectDeposit,
        UploadFolder::BankVoidChequeOrDepositSlip,
        UploadFolder::Education,
        UploadFolder::EmploymentCertificates,
        UploadFolder::DeclarationSignature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFolder::GovAadhaar => "government-ids/aadhaar",
            UploadFolder::GovPan => "government-ids/pan",
            UploadFolder::GovPassport => "government-ids/passport",
            UploadFolder::GovDriversLicense => "government-ids/drivers-license",
            UploadFolder::GovSin => "government-ids/sin",
            UploadFolder::GovSsn => "government-ids/ssn",
            UploadFolder::GovPrCard => "government-ids/pr-card",
            UploadFolder::GovGreenCard => "government-ids/green-card",
            UploadFolder::GovWorkPermit => "government-ids/work-permit",
            UploadFolder::BankVoidCheque => "bank/void-cheque",
            UploadFolder::BankDirectDeposit => "bank/direct-deposit",
            UploadFolder::BankVoidChequeOrDepositSlip => "bank/void-cheque-or-deposit-slip",
            UploadFolder::Education => "education",
            UploadFolder::EmploymentCertificates => "employment/certificates",
            UploadFolder::DeclarationSignature => "declaration/signature",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == value)
    }

    /// MIME types accepted for this folder: the signature folder takes images,
    /// every other folder takes PDFs.
    pub fn allowed_mime_types(&self) -> &'static [FileMimeType] {
        match self {
            UploadFolder::DeclarationSignature => IMAGE_ONLY,
            _ => PDF_ONLY,
        }
    }

    /// All folder fragments, for error messages enumerating the valid set.
    pub fn all_fragments() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for UploadFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const IMAGE_ONLY: &[FileMimeType] = &[FileMimeType::Jpeg, FileMimeType::Jpg, FileMimeType::Png];
const PDF_ONLY: &[FileMimeType] = &[FileMimeType::Pdf];

/// Declared content types the service recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMimeType {
    Jpeg,
    Jpg,
    Png,
    Pdf,
    Doc,
    Docx,
}

impl FileMimeType {
    pub const ALL: &'static [FileMimeType] = &[
        FileMimeType::Jpeg,
        FileMimeType::Jpg,
        FileMimeType::Png,
        FileMimeType::Pdf,
        FileMimeType::Doc,
        FileMimeType::Docx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileMimeType::Jpeg => "image/jpeg",
            FileMimeType::Jpg => "image/jpg",
            FileMimeType::Png => "image/png",
            FileMimeType::Pdf => "application/pdf",
            FileMimeType::Doc => "application/msword",
            FileMimeType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Parse a declared content type. Input is lower-cased first; clients are
    /// inconsistent about MIME casing.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.to_lowercase();
        Self::ALL.iter().copied().find(|m| m.as_str() == normalized)
    }

    /// Filename extension for keys generated from this MIME type. The Word
    /// types have no mapping: no upload folder accepts them today.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FileMimeType::Jpeg => Some("jpeg"),
            FileMimeType::Jpg => Some("jpg"),
            FileMimeType::Png => Some("png"),
            FileMimeType::Pdf => Some("pdf"),
            FileMimeType::Doc | FileMimeType::Docx => None,
        }
    }
}

impl std::fmt::Display for FileMimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for `POST /api/v1/presign/upload`.
///
/// Fields are optional strings on the wire so the admission check can report
/// missing/invalid values with stable error codes instead of opaque
/// deserialization failures.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadRequest {
    /// Top-level namespace (e.g. "blogs").
    pub namespace: Option<String>,
    /// Folder fragment (no namespace or entity id inside).
    pub folder: Option<String>,
    /// Declared content type (e.g. "image/png", "application/pdf").
    pub mime_type: Option<String>,
    /// Declared size guard in bytes.
    pub filesize: Option<u64>,
    /// Optional entity id scoping the key (e.g. a document id).
    pub doc_id: Option<String>,
}

/// Response body for `POST /api/v1/presign/upload`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignUploadResponse {
    /// Resolved storage key (relative path in the bucket).
    pub key: String,
    /// One-time upload URL.
    pub url: String,
    /// Public URL the caller can persist alongside its asset metadata.
    pub public_url: String,
    /// Expiry in seconds for the presigned URL.
    pub expires_in: u64,
    /// Echoed, normalized MIME type.
    pub mime_type: String,
}

/// Request body for `POST /api/v1/presign/download`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignDownloadRequest {
    /// Full storage key. Must be non-empty.
    pub key: Option<String>,
    /// Friendly download filename; the extension is appended from the key
    /// when missing.
    pub filename: Option<String>,
    /// "inline" or "attachment".
    pub disposition: Option<String>,
    /// Expiry in seconds for the presigned URL.
    pub expires_in: Option<u64>,
}

/// Response body for `POST /api/v1/presign/download`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignDownloadResponse {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Request body for `POST /api/v1/temp-files/delete`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTempFilesRequest {
    /// Keys to delete; every key must live under the temp prefix.
    pub keys: Option<Vec<String>>,
}

/// Response body for `POST /api/v1/temp-files/delete`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTempFilesResponse {
    /// Number of keys handed to the store for deletion.
    pub deleted: usize,
}
