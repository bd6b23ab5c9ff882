//! Request handlers for the conversion API.
//!
//! Handlers delegate to the [`LifecycleTracker`](morph_tracker::LifecycleTracker)
//! for submissions and the record list, and to the configured
//! [`JobProvider`](morph_cloudconvert::JobProvider) for raw status
//! lookups, mapping errors via [`AppError`](crate::error::AppError).

pub mod conversions;
pub mod convert;
pub mod formats;
