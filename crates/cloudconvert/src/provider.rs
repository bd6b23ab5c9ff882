//! The job-provider contract.
//!
//! [`JobProvider`] is the seam between this service and whichever backend
//! actually converts files. The live CloudConvert client and the mock both
//! implement it; configuration decides which one a deployment gets.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Submission types
// ---------------------------------------------------------------------------

/// What the caller wants converted and how the source arrives.
#[derive(Debug, Clone)]
pub enum SubmitInput {
    /// The client sends us the bytes; the provider answers with a
    /// pre-signed form to forward them to.
    Upload { target_format: String },
    /// The provider downloads the source itself from a public URL.
    Link {
        source_url: String,
        target_format: String,
    },
}

impl SubmitInput {
    pub fn target_format(&self) -> &str {
        match self {
            Self::Upload { target_format } | Self::Link { target_format, .. } => target_format,
        }
    }
}

/// An accepted job plus, for upload submissions, where to send the bytes.
#[derive(Debug, Clone)]
pub struct SubmittedJob {
    pub job_id: String,
    /// Present only for upload submissions against the live provider. The
    /// mock accepts bytes inline and leaves this empty.
    pub upload_target: Option<UploadTarget>,
}

/// Pre-signed upload form. The byte transfer must replay every parameter
/// verbatim and append the file as the final field.
#[derive(Debug, Clone, Serialize)]
pub struct UploadTarget {
    pub url: String,
    pub parameters: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Status types
// ---------------------------------------------------------------------------

/// Point-in-time view of a job, in the provider's own vocabulary.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub job_id: String,
    /// Raw provider status string, unmapped.
    pub status: String,
    /// URL of the converted file, once the export task has produced one.
    pub export_url: Option<String>,
    /// Source filename as the provider resolved it, which may differ from
    /// any client-side guess.
    pub original_filename: Option<String>,
    /// Tasks that ended in error.
    pub task_errors: Vec<TaskError>,
}

/// Error reported by a single task within a job.
#[derive(Debug, Clone, Serialize)]
pub struct TaskError {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors and the contract
// ---------------------------------------------------------------------------

/// Errors from the provider layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No API credential is configured. Nothing can be submitted or polled
    /// until the deployment fixes its environment.
    #[error("conversion provider API key is not configured")]
    Unavailable,

    /// The remote system rejected or failed a job submission.
    #[error("job creation failed: {0}")]
    JobCreationFailed(String),

    /// A status lookup failed (remote error or unknown job id).
    #[error("job lookup failed: {0}")]
    JobLookupFailed(String),
}

/// Submit/poll contract for conversion backends.
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// Create a remote conversion job. For upload submissions the result
    /// carries the pre-signed target the bytes must be sent to.
    async fn submit_job(&self, input: SubmitInput) -> Result<SubmittedJob, ProviderError>;

    /// Fetch the current state of a job.
    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot, ProviderError>;

    /// Whether the provider has everything it needs to accept work.
    /// Feeds the health endpoint.
    fn is_configured(&self) -> bool {
        true
    }
}
