use thiserror::Error;

/// Failure at the API-client boundary.
///
/// Screens collapse every variant into one generic user-facing message; the
/// variants exist so logs and tests can tell a dead network apart from an
/// unhappy server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Map a non-success response to [`ApiError::Status`], logging the status.
pub(crate) fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        tracing::error!(status = status.as_u16(), url = %resp.url(), "remote service returned an error");
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}
