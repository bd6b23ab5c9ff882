//! In-process mock [`JobProvider`] with deterministic progression.
//!
//! Selected via `PROVIDER=mock` for demos and tests. Jobs advance one
//! stage per status lookup, so the first poll observes `processing` and
//! the second `finished` (with a synthetic export URL). Uploads are
//! accepted inline: no pre-signed form, no network traffic.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use morph_core::formats::filename_from_url;

use crate::provider::{JobProvider, JobSnapshot, ProviderError, SubmitInput, SubmittedJob};

/// Stages a mock job walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockStage {
    Waiting,
    Processing,
    Finished,
}

impl MockStage {
    fn advance(self) -> Self {
        match self {
            Self::Waiting => Self::Processing,
            Self::Processing | Self::Finished => Self::Finished,
        }
    }

    fn as_remote(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Processing => "processing",
            Self::Finished => "finished",
        }
    }
}

#[derive(Debug, Clone)]
struct MockJob {
    target_format: String,
    /// Filename derived from a link source, reported back once finished.
    filename: Option<String>,
    stage: MockStage,
}

/// Mock conversion backend.
#[derive(Default)]
pub struct MockProvider {
    jobs: Mutex<HashMap<String, MockJob>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobProvider for MockProvider {
    async fn submit_job(&self, input: SubmitInput) -> Result<SubmittedJob, ProviderError> {
        let job_id = Uuid::new_v4().to_string();
        let (target_format, filename) = match &input {
            SubmitInput::Upload { target_format } => (target_format.clone(), None),
            SubmitInput::Link {
                source_url,
                target_format,
            } => (target_format.clone(), Some(filename_from_url(source_url))),
        };

        self.jobs.lock().await.insert(
            job_id.clone(),
            MockJob {
                target_format,
                filename,
                stage: MockStage::Waiting,
            },
        );

        Ok(SubmittedJob {
            job_id,
            upload_target: None,
        })
    }

    async fn job_status(&self, job_id: &str) -> Result<JobSnapshot, ProviderError> {
        let mut jobs = self.jobs.lock().await;
        let job = jobs
            .get_mut(job_id)
            .ok_or_else(|| ProviderError::JobLookupFailed(format!("unknown job id: {job_id}")))?;

        job.stage = job.stage.advance();
        let stage = job.stage;

        let export_url = (stage == MockStage::Finished)
            .then(|| format!("https://storage.example.com/{job_id}.{}", job.target_format));
        let original_filename = (stage == MockStage::Finished)
            .then(|| job.filename.clone())
            .flatten();

        Ok(JobSnapshot {
            job_id: job_id.to_string(),
            status: stage.as_remote().to_string(),
            export_url,
            original_filename,
            task_errors: Vec::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
