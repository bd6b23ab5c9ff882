//! Wire types for CloudConvert v2 job responses.
//!
//! Jobs come back as `{"data": {...}}` envelopes holding the job plus its
//! task list. Deserialization is deliberately lenient (`#[serde(default)]`
//! on everything optional) so additive provider changes do not break the
//! client.

use std::collections::HashMap;

use serde::Deserialize;

/// `{"data": ...}` envelope around job responses.
#[derive(Debug, Clone, Deserialize)]
pub struct JobEnvelope {
    pub data: JobData,
}

/// One conversion job and its tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct JobData {
    pub id: String,
    /// Job-level status: `waiting`, `processing`, `finished` or `error`.
    pub status: String,
    #[serde(default)]
    pub tasks: Vec<TaskData>,
}

impl JobData {
    /// Find a task by its assigned name.
    pub fn task(&self, name: &str) -> Option<&TaskData> {
        self.tasks.iter().find(|task| task.name == name)
    }
}

/// One task within a job (import, convert or export).
#[derive(Debug, Clone, Deserialize)]
pub struct TaskData {
    pub name: String,
    #[serde(default)]
    pub operation: String,
    pub status: String,
    /// Human-readable error message, set when `status` is `error`.
    #[serde(default)]
    pub message: Option<String>,
    /// Machine-readable error code, set when `status` is `error`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub result: Option<TaskResult>,
}

/// Result payload of a task that has produced something.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskResult {
    /// Pre-signed upload form, present on `import/upload` tasks.
    #[serde(default)]
    pub form: Option<UploadForm>,
    /// Files produced or resolved by the task.
    #[serde(default)]
    pub files: Vec<FileResult>,
}

/// Pre-signed upload form descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadForm {
    pub url: String,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

/// A file referenced by a task result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileResult {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
