//! Handlers for the `/convert` resource: submission and raw status.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use morph_core::error::CoreError;
use morph_core::formats::validate_target_format;
use morph_core::InputMethod;
use morph_tracker::UploadedFile;

use crate::error::{AppError, AppResult};
use crate::response::{ConvertResponse, JobStatusResponse};
use crate::state::AppState;

/// POST /convert
///
/// Accepts a multipart form and starts a conversion:
///
/// - `targetFormat` (required): desired output format, e.g. `pdf`
/// - `inputMethod` (required): `upload` or `link`
/// - `file`: the file part, required for `upload`
/// - `sourceUrl`: source to fetch, required for `link`
///
/// Returns 201 with the job id. The record is visible in
/// `GET /conversions` before any bytes have moved.
pub async fn submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ConvertResponse>)> {
    let mut target_format: Option<String> = None;
    let mut input_method: Option<String> = None;
    let mut source_url: Option<String> = None;
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "targetFormat" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                target_format = Some(text);
            }
            "inputMethod" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                input_method = Some(text);
            }
            "sourceUrl" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                source_url = Some(text);
            }
            "file" => {
                let filename = field.file_name().unwrap_or("file").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let target_format = target_format
        .ok_or_else(|| AppError::BadRequest("Missing required 'targetFormat' field".into()))?
        .trim()
        .to_lowercase();
    validate_target_format(&target_format)?;

    let input_method = input_method
        .ok_or_else(|| AppError::BadRequest("Missing required 'inputMethod' field".into()))?;
    let method = InputMethod::parse(input_method.trim()).ok_or_else(|| {
        CoreError::Validation(format!(
            "inputMethod must be 'upload' or 'link', got '{}'",
            input_method.trim()
        ))
    })?;

    let started = match method {
        InputMethod::Upload => {
            let (filename, bytes) = file_data
                .ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
            state
                .tracker
                .start_upload_conversion(UploadedFile { filename, bytes }, &target_format)
                .await?
        }
        InputMethod::Link => {
            let source_url = source_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .ok_or_else(|| {
                    CoreError::Validation("Link conversions require a 'sourceUrl' field".into())
                })?;
            state
                .tracker
                .start_url_conversion(&source_url, &target_format)
                .await?
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(ConvertResponse {
            success: true,
            job_id: started.record.id,
            upload_task: started.upload_target,
        }),
    ))
}

/// Query parameters for `GET /convert`.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}

/// GET /convert?jobId={id}
///
/// Fetch the provider's current view of one job and pass it through
/// untranslated: the raw status string, the export URL and resolved
/// filename once available, and any per-task errors.
pub async fn status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<JobStatusResponse>> {
    let job_id = query
        .job_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required 'jobId' query parameter".into()))?;

    let snapshot = state.provider.job_status(job_id).await?;
    Ok(Json(JobStatusResponse::from(snapshot)))
}
