//! File API errors - failures talking to the file index / delete endpoints

use thiserror::Error;

/// Errors returned by a `FileApi` implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileApiError {
    /// The request never produced a response
    #[error("Transport error calling {method}: {reason}")]
    Transport { method: &'static str, reason: String },

    /// Non-success HTTP status
    #[error("{method} returned HTTP {status}")]
    Status { method: &'static str, status: u16 },

    /// The API answered `ok: false`
    #[error("{method} failed: {error}")]
    Api { method: &'static str, error: String },

    /// The response body could not be decoded
    #[error("Malformed {method} response: {reason}")]
    Decode { method: &'static str, reason: String },
}

impl FileApiError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Status { .. } => "UPSTREAM_STATUS",
            Self::Api { .. } => "UPSTREAM_NOT_OK",
            Self::Decode { .. } => "UPSTREAM_DECODE",
        }
    }

    /// API method the error came from (e.g. `files.list`)
    pub fn method(&self) -> &'static str {
        match self {
            Self::Transport { method, .. }
            | Self::Status { method, .. }
            | Self::Api { method, .. }
            | Self::Decode { method, .. } => method,
        }
    }

    /// Short reason suitable for a chat message
    pub fn reason(&self) -> String {
        match self {
            Self::Api { error, .. } => error.clone(),
            Self::Status { status, .. } => format!("http_{status}"),
            Self::Transport { .. } => "transport_error".to_string(),
            Self::Decode { .. } => "invalid_response".to_string(),
        }
    }
}
