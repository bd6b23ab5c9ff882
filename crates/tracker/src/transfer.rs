//! Byte transfer to the provider's pre-signed upload form.

use morph_cloudconvert::UploadTarget;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for upload transfer failures.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upload endpoint returned a non-2xx status code.
    #[error("Upload target returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

/// Send file bytes to a pre-signed upload form.
///
/// Every form parameter is replayed verbatim, then the file is appended as
/// the final `file` field; storage backends reject uploads where the file
/// precedes the policy fields.
pub async fn upload_to_target(
    client: &reqwest::Client,
    target: &UploadTarget,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<(), TransferError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in &target.parameters {
        form = form.text(name.clone(), value.clone());
    }
    form = form.part(
        "file",
        reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string()),
    );

    let response = client.post(&target.url).multipart(form).send().await?;
    if !response.status().is_success() {
        return Err(TransferError::HttpStatus(response.status().as_u16()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
