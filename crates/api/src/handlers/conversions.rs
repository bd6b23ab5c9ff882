//! Handler for the `/conversions` dashboard list.

use axum::extract::State;
use axum::Json;

use crate::response::ConversionListResponse;
use crate::state::AppState;

/// GET /conversions
///
/// Every conversion this process has accepted, newest first, with the
/// lifecycle status the reconciler currently believes.
pub async fn list(State(state): State<AppState>) -> Json<ConversionListResponse> {
    let conversions = state.tracker.records().await;
    Json(ConversionListResponse {
        success: true,
        conversions,
    })
}
