//! Error Types

use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Console error types
///
/// Errors carry strings rather than source errors so an outcome holding one
/// can be cloned into UI state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Request never produced a response (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Payload could not be serialized
    #[error("Encode error: {0}")]
    Encode(String),

    /// Submission blocked by the client-side policy
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Check if retrying the same submission could succeed
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                "The analysis service could not be reached. Please try again.".into()
            }
            Self::Status { status, .. } if *status >= 500 => {
                "The analysis service encountered an error. Please try again.".into()
            }
            Self::Status { status, .. } => format!("The request was rejected (HTTP {status})."),
            Self::Decode(_) => "The service returned an unexpected response.".into(),
            Self::Encode(_) => "The request could not be prepared.".into(),
            Self::Validation(msg) => msg.clone(),
            Self::Config(_) => "The console is misconfigured.".into(),
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
