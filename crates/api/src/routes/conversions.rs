//! Route definitions for the `/conversions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::conversions;
use crate::state::AppState;

/// Routes mounted at `/conversions`.
///
/// ```text
/// GET    /                -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(conversions::list))
}
