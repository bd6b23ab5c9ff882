//! Shared response envelope types for API handlers.
//!
//! Success bodies carry `"success": true` plus operation-specific fields
//! in camelCase, matching what the dashboard frontend expects on the
//! wire. Failure bodies come from [`AppError`](crate::error::AppError)
//! with `"success": false`.

use serde::Serialize;

use morph_cloudconvert::{JobSnapshot, TaskError, UploadTarget};
use morph_core::formats::FormatCategory;
use morph_core::ConversionRecord;

/// Body of a successful `POST /convert`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    /// Remote job id; also the key for `GET /convert?jobId=`.
    pub job_id: String,
    /// The provider's pre-signed upload form, echoed so the client could
    /// push bytes itself. Absent for link submissions and for providers
    /// that issue no form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_task: Option<UploadTarget>,
}

/// Body of a successful `GET /convert?jobId=`.
///
/// A raw passthrough of the provider's view: `status` stays in the
/// provider's own vocabulary, unmapped.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusResponse {
    pub success: bool,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<TaskError>,
}

impl From<JobSnapshot> for JobStatusResponse {
    fn from(snapshot: JobSnapshot) -> Self {
        Self {
            success: true,
            status: snapshot.status,
            export_url: snapshot.export_url,
            original_filename: snapshot.original_filename,
            errors: snapshot.task_errors,
        }
    }
}

/// Body of `GET /conversions`.
#[derive(Debug, Serialize)]
pub struct ConversionListResponse {
    pub success: bool,
    pub conversions: Vec<ConversionRecord>,
}

/// One category in the format catalog.
#[derive(Debug, Serialize)]
pub struct FormatCategoryBody {
    /// Lowercase id, e.g. `"image"`.
    pub id: FormatCategory,
    pub label: &'static str,
    pub extensions: &'static [&'static str],
}

/// Body of `GET /formats`: the full catalog plus a flat extension list.
#[derive(Debug, Serialize)]
pub struct FormatCatalogResponse {
    pub success: bool,
    pub categories: Vec<FormatCategoryBody>,
    pub formats: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
