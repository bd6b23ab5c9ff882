//! REST client for the CloudConvert v2 HTTP endpoints.
//!
//! Wraps job creation and retrieval using [`reqwest`]. Every request
//! authenticates with a bearer token.

use crate::payloads::JobEnvelope;

/// HTTP client for the CloudConvert v2 API.
pub struct CloudConvertApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the CloudConvert REST layer.
#[derive(Debug, thiserror::Error)]
pub enum CloudConvertApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// CloudConvert returned a non-2xx status code.
    #[error("CloudConvert API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl CloudConvertApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base URL including the version segment, e.g.
    ///   `https://api.cloudconvert.com/v2`.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Create a job from a task graph.
    ///
    /// Sends `POST /jobs` with `{"tasks": ...}`. The response carries the
    /// job id plus the created tasks, including the pre-signed upload form
    /// on an `import/upload` task.
    pub async fn create_job(
        &self,
        tasks: &serde_json::Value,
    ) -> Result<JobEnvelope, CloudConvertApiError> {
        let body = serde_json::json!({
            "tasks": tasks,
        });

        let response = self
            .client
            .post(format!("{}/jobs", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Retrieve a job with its tasks.
    ///
    /// Sends `GET /jobs/{id}`.
    pub async fn get_job(&self, job_id: &str) -> Result<JobEnvelope, CloudConvertApiError> {
        let response = self
            .client
            .get(format!("{}/jobs/{}", self.base_url, job_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CloudConvertApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CloudConvertApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CloudConvertApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CloudConvertApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
