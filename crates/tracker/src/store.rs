//! Shared in-memory record list.

use tokio::sync::RwLock;

use morph_core::reconcile::{merge_updates, JobUpdate};
use morph_core::{ConversionRecord, ConversionStatus, Timestamp};

/// Newest-first list of every conversion this process has accepted.
///
/// All mutation happens under a single write lock, so readers always see
/// a consistent state: either none of an update batch applied, or all of
/// it.
#[derive(Default)]
pub struct ConversionStore {
    records: RwLock<Vec<ConversionRecord>>,
}

impl ConversionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the head of the list.
    pub async fn insert(&self, record: ConversionRecord) {
        self.records.write().await.insert(0, record);
    }

    /// Copy of the full list, newest first.
    pub async fn snapshot(&self) -> Vec<ConversionRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Apply one reconcile batch atomically.
    pub async fn apply_updates(&self, updates: &[JobUpdate], now: Timestamp) {
        let mut records = self.records.write().await;
        let merged = merge_updates(std::mem::take(&mut *records), updates, now);
        *records = merged;
    }

    /// Move a record from `Pending` to `Processing` after its byte
    /// transfer landed. Returns false when the record is missing or has
    /// already moved on.
    pub async fn advance_to_processing(&self, job_id: &str) -> bool {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| record.id == job_id) {
            Some(record) if record.status == ConversionStatus::Pending => {
                record.status = ConversionStatus::Processing;
                true
            }
            _ => false,
        }
    }

    /// Mark a record failed, unless it already reached a terminal state.
    pub async fn mark_failed(&self, job_id: &str) -> bool {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|record| record.id == job_id) {
            Some(record) if !record.status.is_terminal() => {
                record.status = ConversionStatus::Failed;
                true
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str) -> ConversionRecord {
        ConversionRecord::upload(id, "input.docx", 1024, "pdf", Utc::now())
    }

    #[tokio::test]
    async fn inserts_keep_newest_first() {
        let store = ConversionStore::new();
        store.insert(record("a")).await;
        store.insert(record("b")).await;
        store.insert(record("c")).await;

        let ids: Vec<String> = store
            .snapshot()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn apply_updates_merges_in_place() {
        let store = ConversionStore::new();
        store.insert(record("a")).await;
        store.insert(record("b")).await;

        let update = JobUpdate {
            job_id: "a".to_string(),
            status: ConversionStatus::Processing,
            download_url: None,
            resolved_filename: None,
        };
        store.apply_updates(&[update], Utc::now()).await;

        let records = store.snapshot().await;
        assert_eq!(records[0].status, ConversionStatus::Pending); // "b"
        assert_eq!(records[1].status, ConversionStatus::Processing); // "a"
    }

    #[tokio::test]
    async fn advance_to_processing_requires_pending() {
        let store = ConversionStore::new();
        store.insert(record("a")).await;

        assert!(store.advance_to_processing("a").await);
        assert!(!store.advance_to_processing("a").await); // already processing
        assert!(!store.advance_to_processing("missing").await);

        let records = store.snapshot().await;
        assert_eq!(records[0].status, ConversionStatus::Processing);
    }

    #[tokio::test]
    async fn mark_failed_leaves_terminal_records_alone() {
        let store = ConversionStore::new();
        let mut completed = record("done");
        completed.status = ConversionStatus::Completed;
        store.insert(completed).await;
        store.insert(record("live")).await;

        assert!(store.mark_failed("live").await);
        assert!(!store.mark_failed("done").await);

        let records = store.snapshot().await;
        assert_eq!(records[0].status, ConversionStatus::Failed);
        assert_eq!(records[1].status, ConversionStatus::Completed);
    }
}
