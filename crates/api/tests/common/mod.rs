use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use morph_api::config::{ProviderKind, ServerConfig};
use morph_api::routes;
use morph_api::state::AppState;
use morph_cloudconvert::{JobProvider, MockProvider};
use morph_tracker::LifecycleTracker;

/// Boundary for hand-built multipart bodies.
pub const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the mock provider.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        reconcile_interval_secs: 3,
        max_upload_mb: 100,
        provider: ProviderKind::Mock,
    }
}

/// Build the full application router backed by the mock provider.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The reconcile scheduler is NOT
/// spawned; tests that need reconciliation drive it explicitly through the
/// state returned by [`build_test_app_with_state`].
pub fn build_test_app() -> Router {
    build_test_app_with_state().0
}

/// Like [`build_test_app`], but also hands back the state so tests can
/// reach the tracker and provider directly.
pub fn build_test_app_with_state() -> (Router, AppState) {
    let config = test_config();
    let provider: Arc<dyn JobProvider> = Arc::new(MockProvider::new());
    let tracker = Arc::new(LifecycleTracker::new(Arc::clone(&provider)));

    let state = AppState {
        config: Arc::new(config),
        provider,
        tracker,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::app_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state.clone());

    (app, state)
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a hand-built multipart form to the app.
///
/// `fields` become text parts; `file`, when given, becomes a `file` part
/// appended last (matching browser form order).
pub async fn post_multipart(
    app: Router,
    path: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(multipart_body(fields, file))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Assemble a `multipart/form-data` body from text fields plus an
/// optional file part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Body {
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Body::from(body)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
