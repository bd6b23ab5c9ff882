//! Conversion lifecycle states and the remote status mapping.
//!
//! The provider reports job progress in its own vocabulary (`waiting`,
//! `processing`, `finished`, ...). Everything inside this service speaks
//! [`ConversionStatus`]; [`map_remote_status`] is the only place the two
//! vocabularies meet.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ConversionStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a tracked conversion.
///
/// Records only ever move forward: `Pending` → `Processing` →
/// (`Completed` | `Failed`). A fast job may skip `Processing` entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl ConversionStatus {
    /// Whether this state is final. Terminal records are never polled again
    /// and never change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Position in the forward-only progression. The two terminal states
    /// rank equally; [`is_terminal`](Self::is_terminal) arbitrates between
    /// them.
    pub fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Processing => 1,
            Self::Completed | Self::Failed => 2,
        }
    }

    /// Wire value, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// Remote status mapping
// ---------------------------------------------------------------------------

/// Map a provider-reported job status onto the local vocabulary.
///
/// Case-insensitive and total: a value the table does not know maps to
/// `Pending` ("not done yet") rather than failing, so new provider states
/// degrade gracefully instead of breaking the poll loop.
///
/// | Remote                    | Local      |
/// |---------------------------|------------|
/// | `waiting`, `queued`       | Pending    |
/// | `processing`, `uploading` | Processing |
/// | `finished`                | Completed  |
/// | `error`                   | Failed     |
/// | anything else             | Pending    |
pub fn map_remote_status(remote: &str) -> ConversionStatus {
    match remote.to_ascii_lowercase().as_str() {
        "waiting" | "queued" => ConversionStatus::Pending,
        "processing" | "uploading" => ConversionStatus::Processing,
        "finished" => ConversionStatus::Completed,
        "error" => ConversionStatus::Failed,
        _ => ConversionStatus::Pending,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConversionStatus ----------------------------------------------------

    #[test]
    fn terminal_states_are_completed_and_failed() {
        assert!(!ConversionStatus::Pending.is_terminal());
        assert!(!ConversionStatus::Processing.is_terminal());
        assert!(ConversionStatus::Completed.is_terminal());
        assert!(ConversionStatus::Failed.is_terminal());
    }

    #[test]
    fn rank_orders_the_progression() {
        assert!(ConversionStatus::Pending.rank() < ConversionStatus::Processing.rank());
        assert!(ConversionStatus::Processing.rank() < ConversionStatus::Completed.rank());
        assert_eq!(
            ConversionStatus::Completed.rank(),
            ConversionStatus::Failed.rank()
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConversionStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&ConversionStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn as_str_matches_serde_representation() {
        for status in [
            ConversionStatus::Pending,
            ConversionStatus::Processing,
            ConversionStatus::Completed,
            ConversionStatus::Failed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    // -- map_remote_status ---------------------------------------------------

    #[test]
    fn maps_known_remote_statuses() {
        assert_eq!(map_remote_status("waiting"), ConversionStatus::Pending);
        assert_eq!(map_remote_status("queued"), ConversionStatus::Pending);
        assert_eq!(map_remote_status("processing"), ConversionStatus::Processing);
        assert_eq!(map_remote_status("uploading"), ConversionStatus::Processing);
        assert_eq!(map_remote_status("finished"), ConversionStatus::Completed);
        assert_eq!(map_remote_status("error"), ConversionStatus::Failed);
    }

    #[test]
    fn mapping_is_case_insensitive() {
        assert_eq!(map_remote_status("FINISHED"), ConversionStatus::Completed);
        assert_eq!(map_remote_status("Processing"), ConversionStatus::Processing);
        assert_eq!(map_remote_status("Waiting"), ConversionStatus::Pending);
        assert_eq!(map_remote_status("ERROR"), ConversionStatus::Failed);
    }

    #[test]
    fn unknown_remote_status_maps_to_pending() {
        assert_eq!(map_remote_status("exporting"), ConversionStatus::Pending);
        assert_eq!(map_remote_status(""), ConversionStatus::Pending);
        assert_eq!(map_remote_status("done?"), ConversionStatus::Pending);
    }
}
