use thiserror::Error;

/// Errors that can occur when talking to the moderation REST API.
///
/// Callers in the dashboard treat every variant the same way (log it, show a
/// panel-local message, keep prior state); the variants exist so the message and
/// the log line can say what actually went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport level failure (connection refused, reset, bad TLS, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The server answered 2xx, but not with the status this endpoint requires.
    #[error("Unexpected response status {0}")]
    UnexpectedStatus(u16),

    /// Response body was not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid API base url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// True when the server replied 2xx but the endpoint demanded a specific code.
    pub fn is_unexpected_success(&self) -> bool {
        matches!(self, Self::UnexpectedStatus(_))
    }
}
