//! Conversion records as shown in the dashboard list.

use serde::{Deserialize, Serialize};

use crate::formats::{file_extension, filename_from_url};
use crate::status::ConversionStatus;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// InputMethod
// ---------------------------------------------------------------------------

/// How the source file reaches the conversion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    /// The client sends the bytes to us and we forward them to the
    /// provider's pre-signed upload form.
    Upload,
    /// The provider fetches the source itself from a public URL.
    Link,
}

impl InputMethod {
    /// Parse the wire value (`"upload"` / `"link"`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upload" => Some(Self::Upload),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Link => "link",
        }
    }
}

// ---------------------------------------------------------------------------
// ConversionRecord
// ---------------------------------------------------------------------------

/// One tracked conversion.
///
/// Invariants, upheld by the constructors and the reconcile merge:
/// `download_url` and `completed_at` are set iff the record is completed,
/// `source_url` is set iff the input method is `Link`, and `file_size` is
/// 0 when unknown (link submissions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    /// Provider job id; doubles as the record id.
    pub id: String,
    pub original_filename: String,
    pub original_format: String,
    pub target_format: String,
    pub file_size: u64,
    #[serde(rename = "conversion_status")]
    pub status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    pub input_method: InputMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl ConversionRecord {
    /// Record for a direct file upload. Starts `Pending`; the tracker flips
    /// it to `Processing` once the byte transfer lands.
    pub fn upload(
        job_id: &str,
        filename: &str,
        file_size: u64,
        target_format: &str,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: job_id.to_string(),
            original_filename: filename.to_string(),
            original_format: file_extension(filename),
            target_format: target_format.to_string(),
            file_size,
            status: ConversionStatus::Pending,
            download_url: None,
            input_method: InputMethod::Upload,
            source_url: None,
            created_at,
            completed_at: None,
        }
    }

    /// Record for a URL submission. The filename is guessed from the URL's
    /// last path segment (the provider may correct it later) and the size
    /// is unknown until the provider fetches the source, so it starts at 0.
    pub fn link(
        job_id: &str,
        source_url: &str,
        target_format: &str,
        created_at: Timestamp,
    ) -> Self {
        let filename = filename_from_url(source_url);
        let original_format = file_extension(&filename);
        Self {
            id: job_id.to_string(),
            original_filename: filename,
            original_format,
            target_format: target_format.to_string(),
            file_size: 0,
            status: ConversionStatus::Pending,
            download_url: None,
            input_method: InputMethod::Link,
            source_url: Some(source_url.to_string()),
            created_at,
            completed_at: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
