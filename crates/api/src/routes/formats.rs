//! Route definitions for the `/formats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::formats;
use crate::state::AppState;

/// Routes mounted at `/formats`.
///
/// ```text
/// GET    /                -> catalog
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(formats::catalog))
}
