use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Which conversion backend is selected.
    pub provider: &'static str,
    /// Whether the backend has the credentials it needs.
    pub provider_configured: bool,
}

/// GET /health -- returns service and conversion provider readiness.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_configured = state.provider.is_configured();

    let status = if provider_configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        provider: state.config.provider.label(),
        provider_configured,
    })
}

/// Mount health check routes (root-level).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
