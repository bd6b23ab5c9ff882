//! Route definitions for the `/convert` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::convert;
use crate::state::AppState;

/// Routes mounted at `/convert`.
///
/// ```text
/// POST   /                -> submit
/// GET    /                -> status (?jobId={id})
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(convert::status).post(convert::submit))
}
