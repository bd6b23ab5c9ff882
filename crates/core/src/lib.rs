//! Core domain model for the morph conversion service.
//!
//! Pure types and logic shared by the other crates:
//!
//! - [`ConversionRecord`]: one tracked conversion as the dashboard sees it.
//! - [`ConversionStatus`] and [`map_remote_status`]: the local lifecycle
//!   vocabulary and the translation from the provider's wording into it.
//! - [`formats`]: the supported-format catalog and filename helpers.
//! - [`reconcile`]: the pure merge that folds polled provider snapshots
//!   into the record list.
//!
//! Nothing in this crate performs IO.

pub mod conversion;
pub mod error;
pub mod formats;
pub mod reconcile;
pub mod status;
pub mod types;

pub use conversion::{ConversionRecord, InputMethod};
pub use error::CoreError;
pub use status::{map_remote_status, ConversionStatus};
pub use types::Timestamp;
