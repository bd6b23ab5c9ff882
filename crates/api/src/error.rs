use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use morph_cloudconvert::ProviderError;
use morph_core::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ProviderError`] for the
/// conversion backend, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce the service's standard
/// `{"success": false, "error": ..., "code": ...}` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `morph_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An error from the conversion provider.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Provider errors ---
            AppError::Provider(provider) => match provider {
                // Missing credential is a deployment problem, not the
                // caller's fault.
                ProviderError::Unavailable => {
                    tracing::error!("Conversion provider is not configured");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PROVIDER_UNAVAILABLE",
                        provider.to_string(),
                    )
                }
                ProviderError::JobCreationFailed(_) => (
                    StatusCode::BAD_GATEWAY,
                    "JOB_CREATION_FAILED",
                    provider.to_string(),
                ),
                ProviderError::JobLookupFailed(_) => (
                    StatusCode::BAD_GATEWAY,
                    "JOB_LOOKUP_FAILED",
                    provider.to_string(),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
