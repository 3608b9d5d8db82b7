//! Upstream failure kinds.

use relay_core::RelayError;
use reqwest::StatusCode;
use thiserror::Error;

/// Service name attached to converted errors.
pub const UPSTREAM_SERVICE: &str = "deepseek";

/// Failure talking to the chat-completion API.
///
/// Every variant is an internal failure; none of the detail it carries is
/// meant for the end user.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Non-success status with the response body.
    #[error("API error {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Non-success status whose body could not be read.
    #[error("API error {status}, failed to read body: {source}")]
    BodyRead {
        status: StatusCode,
        source: reqwest::Error,
    },

    /// Success status but an empty `choices` list.
    #[error("empty response from API")]
    EmptyResponse,

    /// Connect, send, or timeout failure.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Success status but the body is not the expected envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// HTTP status returned by the API, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } | Self::BodyRead { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<UpstreamError> for RelayError {
    fn from(err: UpstreamError) -> Self {
        RelayError::external(UPSTREAM_SERVICE, err.to_string())
    }
}
