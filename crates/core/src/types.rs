//! Shared type aliases.

/// UTC timestamp used on all records.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
