//! Submission orchestration and poll-based reconciliation.
//!
//! [`LifecycleTracker`] owns the record store and the provider handle.
//! Submissions insert an optimistic `Pending` record before any bytes
//! move, so the dashboard shows the conversion immediately; the byte
//! transfer then runs in a spawned task whose outcome explicitly advances
//! or fails the record. Reconcile passes poll every active record
//! concurrently and fold the answers into the store in one atomic merge.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::future::join_all;

use morph_cloudconvert::{JobProvider, ProviderError, SubmitInput, UploadTarget};
use morph_core::reconcile::{active_jobs, JobUpdate};
use morph_core::ConversionRecord;

use crate::store::ConversionStore;
use crate::transfer::{self, TransferError};

/// HTTP timeout for a single upload transfer.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(120);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A file received from the client, ready to forward.
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// An accepted submission: the optimistic record plus, for uploads, the
/// provider's pre-signed form echoed back to the client.
#[derive(Debug, Clone)]
pub struct StartedConversion {
    pub record: ConversionRecord,
    pub upload_target: Option<UploadTarget>,
}

/// Outcome counts for one reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Active records polled.
    pub polled: usize,
    /// Lookups answered and folded into the merge.
    pub applied: usize,
    /// Lookups that failed and were skipped this pass.
    pub failed: usize,
}

// ---------------------------------------------------------------------------
// LifecycleTracker
// ---------------------------------------------------------------------------

/// Tracks every conversion accepted by this process.
pub struct LifecycleTracker {
    provider: Arc<dyn JobProvider>,
    store: Arc<ConversionStore>,
    http: reqwest::Client,
}

impl LifecycleTracker {
    pub fn new(provider: Arc<dyn JobProvider>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(TRANSFER_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            provider,
            store: Arc::new(ConversionStore::new()),
            http,
        }
    }

    /// Current record list, newest first.
    pub async fn records(&self) -> Vec<ConversionRecord> {
        self.store.snapshot().await
    }

    /// Submit an uploaded file for conversion.
    ///
    /// The record is inserted as `Pending` before any bytes move, then the
    /// transfer to the provider's pre-signed form runs in the background:
    /// success forces the record to `Processing` (later confirmed by
    /// reconciliation), failure marks it `Failed`.
    pub async fn start_upload_conversion(
        &self,
        file: UploadedFile,
        target_format: &str,
    ) -> Result<StartedConversion, ProviderError> {
        let submitted = self
            .provider
            .submit_job(SubmitInput::Upload {
                target_format: target_format.to_string(),
            })
            .await?;
        let upload_target = submitted.upload_target.clone();

        let record = ConversionRecord::upload(
            &submitted.job_id,
            &file.filename,
            file.bytes.len() as u64,
            target_format,
            Utc::now(),
        );
        self.store.insert(record.clone()).await;
        tracing::info!(
            job_id = %record.id,
            filename = %record.original_filename,
            target_format,
            "Upload conversion accepted"
        );

        let store = Arc::clone(&self.store);
        let client = self.http.clone();
        let job_id = record.id.clone();
        tokio::spawn(async move {
            let outcome = match submitted.upload_target {
                Some(target) => {
                    transfer::upload_to_target(&client, &target, &file.filename, file.bytes).await
                }
                // No upload form to send to; nothing to transfer.
                None => Ok(()),
            };
            finish_transfer(&store, &job_id, outcome).await;
        });

        Ok(StartedConversion {
            record,
            upload_target,
        })
    }

    /// Submit a conversion whose source the provider fetches itself.
    pub async fn start_url_conversion(
        &self,
        source_url: &str,
        target_format: &str,
    ) -> Result<StartedConversion, ProviderError> {
        let submitted = self
            .provider
            .submit_job(SubmitInput::Link {
                source_url: source_url.to_string(),
                target_format: target_format.to_string(),
            })
            .await?;

        let record =
            ConversionRecord::link(&submitted.job_id, source_url, target_format, Utc::now());
        self.store.insert(record.clone()).await;
        tracing::info!(
            job_id = %record.id,
            source_url,
            target_format,
            "Link conversion accepted"
        );

        Ok(StartedConversion {
            record,
            upload_target: None,
        })
    }

    /// One reconcile pass: poll every active record concurrently, then
    /// fold the answers into the store in a single atomic merge.
    ///
    /// Individual lookup failures are logged and skipped; the affected
    /// record rides through unchanged and is retried on the next pass.
    pub async fn reconcile(&self) -> ReconcileSummary {
        let ids = active_jobs(&self.store.snapshot().await);
        if ids.is_empty() {
            return ReconcileSummary::default();
        }

        let lookups = ids.iter().map(|id| {
            let provider = Arc::clone(&self.provider);
            async move { (id.clone(), provider.job_status(id).await) }
        });
        let results = join_all(lookups).await;

        let mut updates = Vec::with_capacity(results.len());
        let mut failed = 0;
        for (job_id, result) in results {
            match result {
                Ok(snapshot) => updates.push(JobUpdate::from_remote(
                    &job_id,
                    &snapshot.status,
                    snapshot.export_url,
                    snapshot.original_filename,
                )),
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        job_id = %job_id,
                        error = %e,
                        "Status lookup failed; will retry next pass"
                    );
                }
            }
        }

        let summary = ReconcileSummary {
            polled: ids.len(),
            applied: updates.len(),
            failed,
        };
        if !updates.is_empty() {
            self.store.apply_updates(&updates, Utc::now()).await;
        }
        summary
    }
}

/// Apply a finished byte transfer to the optimistic record.
async fn finish_transfer(
    store: &ConversionStore,
    job_id: &str,
    outcome: Result<(), TransferError>,
) {
    match outcome {
        Ok(()) => {
            if store.advance_to_processing(job_id).await {
                tracing::debug!(job_id, "Upload transfer complete; conversion processing");
            }
        }
        Err(e) => {
            tracing::warn!(
                job_id,
                error = %e,
                "Upload transfer failed; marking conversion failed"
            );
            store.mark_failed(job_id).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
