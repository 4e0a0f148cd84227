use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::api::ErrorResponse;

pub const INVALID_PROMPT_MESSAGE: &str = "Invalid prompt provided";
pub const MISSING_KEY_MESSAGE: &str = "RapidAPI key not configured";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to enhance prompt. Please try again.";

/// The four outcomes a client can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    ConfigurationMissing,
    UpstreamError,
    InternalError,
}

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("userPrompt must be a non-empty string")]
    InvalidInput,

    #[error("RAPIDAPI_KEY is not set")]
    ConfigurationMissing,

    #[error("upstream request failed with status {status}")]
    Upstream { status: StatusCode },

    #[error("upstream request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("failed to reach upstream: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl EnhanceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput => ErrorKind::InvalidInput,
            Self::ConfigurationMissing => ErrorKind::ConfigurationMissing,
            Self::Upstream { .. } => ErrorKind::UpstreamError,
            Self::Timeout { .. }
            | Self::Transport(_)
            | Self::Body(_)
            | Self::MalformedBody(_)
            | Self::Decode(_) => ErrorKind::InternalError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::ConfigurationMissing
            | ErrorKind::UpstreamError
            | ErrorKind::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Upstream and internal details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => INVALID_PROMPT_MESSAGE,
            ErrorKind::ConfigurationMissing => MISSING_KEY_MESSAGE,
            ErrorKind::UpstreamError | ErrorKind::InternalError => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for EnhanceError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::InvalidInput => warn!(error = %self, "rejected enhance request"),
            ErrorKind::ConfigurationMissing => error!(error = %self, "enhance endpoint misconfigured"),
            ErrorKind::UpstreamError | ErrorKind::InternalError => {
                error!(error = %self, kind = ?self.kind(), "error enhancing prompt")
            }
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.public_message().to_string(),
            }),
        )
            .into_response()
    }
}
