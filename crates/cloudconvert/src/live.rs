//! Live CloudConvert-backed [`JobProvider`].
//!
//! Every submission creates a three-task job: an import task bringing the
//! source in (pre-signed upload form or URL fetch), a convert task
//! targeting the requested format, and an export task publishing the
//! result at a downloadable URL.

use std::env;

use async_trait::async_trait;

use morph_core::formats::filename_from_url;

use crate::api::CloudConvertApi;
use crate::payloads::JobData;
use crate::provider::{
    JobProvider, JobSnapshot, ProviderError, SubmitInput, SubmittedJob, TaskError, UploadTarget,
};

/// Default public API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.cloudconvert.com/v2";

/// Task names assigned to every job's task graph.
const IMPORT_TASK: &str = "import-file";
const CONVERT_TASK: &str = "convert-file";
const EXPORT_TASK: &str = "export-file";

/// CloudConvert-backed provider.
///
/// Constructed with an optional credential: a deployment without one still
/// boots (and reports itself unconfigured on the health endpoint), but
/// every submit and poll fails with [`ProviderError::Unavailable`].
pub struct CloudConvertProvider {
    api: Option<CloudConvertApi>,
}

impl CloudConvertProvider {
    /// Build from the environment.
    ///
    /// | Variable               | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `CLOUDCONVERT_API_KEY` | unset (provider reports unavailable) |
    /// | `CLOUDCONVERT_API_URL` | `https://api.cloudconvert.com/v2`    |
    pub fn from_env() -> Self {
        let base_url =
            env::var("CLOUDCONVERT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = env::var("CLOUDCONVERT_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        Self::new(base_url, api_key)
    }

    /// Build with explicit settings. `api_key = None` produces a provider
    /// that rejects all work as unavailable.
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            api: api_key.map(|key| CloudConvertApi::new(base_url, key)),
        }
    }

    fn api(&self) -> Result<&CloudConvertApi, ProviderError> {
        self.api.as_ref().ok_or(ProviderError::Unavailable)
    }

    /// Task graph for one submission: import, convert, export.
    fn build_tasks(input: &SubmitInput) -> serde_json::Value {
        let import = match input {
            SubmitInput::Upload { .. } => serde_json::json!({
                "operation": "import/upload",
            }),
            SubmitInput::Link { source_url, .. } => serde_json::json!({
                "operation": "import/url",
                "url": source_url,
                "filename": filename_from_url(source_url),
            }),
        };

        serde_json::json!({
            IMPORT_TASK: import,
            CONVERT_TASK: {
                "operation": "convert",
                "input": IMPORT_TASK,
                "output_format": input.target_format(),
            },
            EXPORT_TASK: {
                "operation": "export/url",
                "input": CONVERT_TASK,
            },
        })
    }

    /// Pre-signed upload form from the import task, when present.
    fn upload_target(job: &JobData) -> Option<UploadTarget> {
        let form = job.task(IMPORT_TASK)?.result.as_ref()?.form.as_ref()?;
        Some(UploadTarget {
            url: form.url.clone(),
            parameters: form.parameters.clone(),
        })
    }

    /// Download URL from the export task, once it has produced a file.
    fn export_url(job: &JobData) -> Option<String> {
        job.task(EXPORT_TASK)?
            .result
            .as_ref()?
            .files
            .first()?
            .url
            .clone()
    }

    /// Source filename as resolved by the import task.
    fn resolved_filename(job: &JobData) -> Option<String> {
        job.task(IMPORT_TASK)?
            .result
            .as_ref()?
            .files
            .first()?
            .filename
            .clone()
    }

    /// Details of every task that ended in error.
    fn task_errors(job: &JobData) -> Vec<TaskError> {
        job.tasks
            .iter()
            .filter(|task| task.status == "error")
            .map(|task| TaskError {
                name: task.name.clone(),
                message: task
                    .message
                    .clone()
                    .unwrap_or_else(|| "task failed".to_string()),
                code: task.code.clone(),
            })
            .collect()
    }

    fn snapshot(job: &JobData) -> JobSnapshot {
        JobSnapshot {
            job_id: job.id.clone(),
            status: job.status.clone(),
            export_url: Self::export_url(job),
            original_filename: Self::resolved_filename(job),
            task_errors: Self::task_errors(job),
        }
    }
}

#[async_trait]
impl JobProvider for CloudConvertProvider {
    async fn submit_job(&self, input: SubmitInput) -> Result<SubmittedJob, ProviderError> {
        let api = self.api()?;
        let tasks = Self::build_tasks(&input);
        let envelope = api
            .create_job(&tasks)
            .await
            .map_err(|e| ProviderError::JobCreationFailed(e.to_string()))?;

        let job = envelope.data;
        let upload_target = match input {
            SubmitInput::Upload { .. } => match Self::upload_target(&job) {
                Some(target) => Some(target),
                None => {
                    return Err(ProviderError::JobCreationFailed(
                        "job was created without an upload form".to_string(),
                    ))
                }
            },
            SubmitInput::Link { .. } => None,
        };

        Ok(SubmittedJob {
            job_id: job.id,
            upload_target,
        })
    }

    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot, ProviderError> {
        let api = self.api()?;
        let envelope = api
            .get_job(job_id)
            .await
            .map_err(|e| ProviderError::JobLookupFailed(e.to_string()))?;
        Ok(Self::snapshot(&envelope.data))
    }

    fn is_configured(&self) -> bool {
        self.api.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
