use thiserror::Error;

/// Errors surfaced to the caller of the ticket action.
///
/// At invocation time only a missing base URL is reported; every other
/// failure is absorbed into a fallback ticket id instead.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The support API base URL is empty.
    #[error("Missing support API URL")]
    MissingBaseUrl,

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failures of the upstream exchange. Logged, then replaced by a fallback id.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The API answered with a non-2xx status.
    #[error("Support API returned HTTP {0}")]
    HttpStatus(u16),

    /// No response before the configured timeout; the request was aborted.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Connection, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(String),

    /// The auth header name or token cannot be sent as an HTTP header.
    #[error("Invalid auth header: {0}")]
    InvalidHeader(String),

    /// The response body is not valid JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl TransportError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::HttpStatus(_) => "http_status",
            TransportError::Timeout(_) => "timeout",
            TransportError::Network(_) => "network",
            TransportError::InvalidHeader(_) => "invalid_header",
            TransportError::InvalidBody(_) => "invalid_body",
        }
    }
}
