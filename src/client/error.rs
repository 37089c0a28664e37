//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when communicating with an agentry proxy.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Proxy returned an error envelope.
    #[error("api error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Proxy health check failed.
    #[error("server unhealthy (status {status})")]
    ServerUnhealthy { status: u16 },
}

impl ClientError {
    /// The HTTP status behind this error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } | Self::ServerUnhealthy { status } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
