//! Error types module
//!
//! All client-side errors are unified under the `ClientError` enum: API
//! failures carry the HTTP status and the server's message body, decode
//! failures wrap the underlying serde error.

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Map an HTTP status + server message to the matching variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ClientError::Unauthorized(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        }
    }

    /// Whether retrying the same request can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status >= 500 || *status == 429)
    }
}
