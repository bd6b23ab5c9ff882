//! Pure reconciliation of polled provider snapshots into the record list.
//!
//! The tracker polls the provider for every non-terminal record, turns
//! each answer into a [`JobUpdate`], and applies the whole batch in a
//! single [`merge_updates`] call under the store's write lock. The merge
//! performs no IO and decides nothing about when or what to poll; it only
//! folds observed facts into records, which keeps the transition rules
//! testable in isolation.

use crate::conversion::ConversionRecord;
use crate::formats::file_extension;
use crate::status::{map_remote_status, ConversionStatus};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// JobUpdate
// ---------------------------------------------------------------------------

/// Facts observed about one job during a poll, normalized onto the local
/// status vocabulary and ready to merge.
#[derive(Debug, Clone, PartialEq)]
pub struct JobUpdate {
    pub job_id: String,
    pub status: ConversionStatus,
    /// Download URL for the converted file. Only meaningful together with
    /// `Completed`.
    pub download_url: Option<String>,
    /// Provider-resolved source filename, when it knows better than the
    /// client-side guess.
    pub resolved_filename: Option<String>,
}

impl JobUpdate {
    /// Build an update from a raw provider snapshot.
    ///
    /// A `finished` report that carries no export URL is held at
    /// `Processing`: a completed record must always have its download URL,
    /// so the transition waits for a later poll that includes one.
    pub fn from_remote(
        job_id: &str,
        remote_status: &str,
        export_url: Option<String>,
        resolved_filename: Option<String>,
    ) -> Self {
        let mut status = map_remote_status(remote_status);
        if status == ConversionStatus::Completed && export_url.is_none() {
            status = ConversionStatus::Processing;
        }
        Self {
            job_id: job_id.to_string(),
            status,
            download_url: export_url,
            resolved_filename,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection and merge
// ---------------------------------------------------------------------------

/// Ids of records still worth polling, in list order.
pub fn active_jobs(records: &[ConversionRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| !record.status.is_terminal())
        .map(|record| record.id.clone())
        .collect()
}

/// Fold a batch of updates into the record list.
///
/// Rules:
/// - records without a matching update pass through untouched;
/// - terminal records never change;
/// - statuses only move forward (a stale `Pending` observation cannot
///   demote a `Processing` record);
/// - the completed transition records the download URL and stamps
///   `completed_at = now`;
/// - a resolved filename replaces the client guess on any active record,
///   and the derived source format follows it.
///
/// Order and length are preserved. Applying the same batch twice leaves
/// the list unchanged the second time.
pub fn merge_updates(
    records: Vec<ConversionRecord>,
    updates: &[JobUpdate],
    now: Timestamp,
) -> Vec<ConversionRecord> {
    records
        .into_iter()
        .map(|mut record| {
            let update = match updates.iter().find(|u| u.job_id == record.id) {
                Some(update) => update,
                None => return record,
            };
            if record.status.is_terminal() {
                return record;
            }
            if let Some(name) = &update.resolved_filename {
                record.original_filename = name.clone();
                record.original_format = file_extension(name);
            }
            if update.status.rank() > record.status.rank() {
                record.status = update.status;
                if update.status == ConversionStatus::Completed {
                    record.download_url = update.download_url.clone();
                    record.completed_at = Some(now);
                }
            }
            record
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
