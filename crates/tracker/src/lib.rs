//! Conversion lifecycle tracking.
//!
//! Owns the in-memory record list and drives it through the full
//! lifecycle:
//!
//! - [`ConversionStore`]: the shared, newest-first record list.
//! - [`LifecycleTracker`]: submission orchestration (optimistic insert,
//!   background byte transfer) and poll-based reconciliation.
//! - [`scheduler`]: the cancellable loop that runs reconcile passes.

pub mod scheduler;
pub mod store;
pub mod tracker;
pub mod transfer;

pub use store::ConversionStore;
pub use tracker::{LifecycleTracker, ReconcileSummary, StartedConversion, UploadedFile};
pub use transfer::TransferError;
