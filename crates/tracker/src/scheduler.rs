//! Background reconcile scheduler.
//!
//! Runs [`LifecycleTracker::reconcile`] on a fixed interval until
//! cancelled. The pass is awaited inside the tick arm, so a slow pass
//! delays the next tick instead of overlapping it, and
//! `MissedTickBehavior::Skip` drops any backlog that builds up behind it.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::tracker::LifecycleTracker;

/// Run the reconcile loop.
///
/// Polls every active conversion each `interval` until `cancel` is
/// triggered. Cancellation is observed both between ticks and mid-pass;
/// an interrupted pass is abandoned, not merged.
pub async fn run(tracker: Arc<LifecycleTracker>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Reconcile scheduler started"
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reconcile scheduler stopping");
                break;
            }
            _ = ticker.tick() => {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("Reconcile scheduler stopping mid-pass");
                        break;
                    }
                    summary = tracker.reconcile() => {
                        if summary.polled > 0 {
                            tracing::debug!(
                                polled = summary.polled,
                                applied = summary.applied,
                                failed = summary.failed,
                                "Reconcile pass complete"
                            );
                        }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
