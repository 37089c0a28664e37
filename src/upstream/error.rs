//! Upstream client error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Errors that can occur when talking to the upstream storefront API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Base URL or API key is missing; no request was attempted.
    #[error("upstream API is not configured")]
    Configuration,

    /// The upstream could not be reached at all.
    #[error("failed to connect to upstream: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// The request could not even be constructed.
    #[error("failed to build upstream request: {0}")]
    Request(#[source] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The upstream answered 2xx but the body was not the JSON we expect.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Split a reqwest transport error into its two meanings: a request we
    /// never managed to build, or a server we never managed to reach.
    #[must_use]
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Self::Request(error)
        } else {
            Self::Connectivity(error)
        }
    }
}
