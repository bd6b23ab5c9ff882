use std::sync::Arc;

use morph_cloudconvert::JobProvider;
use morph_tracker::LifecycleTracker;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Conversion backend, live or mock per configuration.
    pub provider: Arc<dyn JobProvider>,
    /// Owner of the in-memory record list and reconciliation driver.
    pub tracker: Arc<LifecycleTracker>,
}
