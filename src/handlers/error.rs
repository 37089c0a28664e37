//! The uniform JSON error envelope for the proxy surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::upstream::UpstreamError;

/// Message for requests made while the upstream credentials are absent.
pub const CONFIGURATION_MESSAGE: &str = "API configuration is missing";

/// Message for an upstream we could not reach at all.
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to API server. Please try again later.";

/// Message for a 2xx upstream body that breaks the expected schema.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid response format from API";

/// Everything a proxy handler can answer with besides a forwarded body.
///
/// Each variant pins one branch of the status taxonomy: caller mistakes are
/// 400, missing configuration and our own failures are 500, an unreachable
/// upstream is 503, and an upstream that *did* answer keeps its status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{CONFIGURATION_MESSAGE}")]
    Configuration,

    #[error("{CONNECTIVITY_MESSAGE}")]
    Connectivity,

    /// Pass-through of an upstream error answer, message already resolved.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The upstream broke its own schema on a success response.
    #[error("{INVALID_FORMAT_MESSAGE}")]
    InvalidFormat { details: Option<String> },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_format(details: impl Into<String>) -> Self {
        Self::InvalidFormat {
            details: Some(details.into()),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Internal(_) | Self::InvalidFormat { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Connectivity => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::InvalidFormat { details } => details.clone(),
            _ => None,
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::Configuration => Self::Configuration,
            UpstreamError::Connectivity(_) => Self::Connectivity,
            UpstreamError::Api { status, message } => Self::Upstream { status, message },
            UpstreamError::Decode(e) => Self::invalid_format(e.to_string()),
            UpstreamError::Request(e) => Self::Internal(e.to_string()),
        }
    }
}

/// Wire shape of every error answer: `{"error": "...", "details": "..."}`,
/// with `details` omitted when there is nothing beyond the message.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };

        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %body.error, "request failed");
        } else {
            debug!(status = status.as_u16(), error = %body.error, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}
