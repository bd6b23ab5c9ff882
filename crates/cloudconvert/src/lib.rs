//! CloudConvert job gateway.
//!
//! Everything that talks to the conversion backend lives here:
//!
//! - [`JobProvider`]: the submit/poll contract the rest of the service
//!   programs against.
//! - [`CloudConvertProvider`]: the live implementation over the
//!   CloudConvert v2 REST API.
//! - [`MockProvider`]: an in-process stand-in with deterministic job
//!   progression, selected by configuration for credential-less runs.

pub mod api;
pub mod live;
pub mod mock;
pub mod payloads;
pub mod provider;

pub use live::CloudConvertProvider;
pub use mock::MockProvider;
pub use provider::{
    JobProvider, JobSnapshot, ProviderError, SubmitInput, SubmittedJob, TaskError, UploadTarget,
};
