pub mod conversions;
pub mod convert;
pub mod formats;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the conversion API route tree (mounted at the root, next to
/// `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /convert            POST             submit a conversion (multipart)
/// /convert            GET ?jobId=      raw provider status for one job
///
/// /conversions        GET              record list, newest first
///
/// /formats            GET              supported-format catalog
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/convert", convert::router())
        .nest("/conversions", conversions::router())
        .nest("/formats", formats::router())
}
