//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or connectivity failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend-supplied `{error}` payload or unrecognized failure status
    #[error("{0}")]
    Application(String),

    /// 401 from a Basic-authenticated endpoint
    #[error("Unauthorized")]
    Unauthorized,

    /// 401 during the login probe specifically
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Login probe failed with something other than a 401
    #[error("Failed to verify credentials: {0}")]
    VerificationFailed(String),

    /// Client-side precondition failure, raised before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// No stored credentials; the caller must redirect to the login flow
    #[error("Login required")]
    LoginRequired,

    /// Response body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl ClientError {
    /// Message to surface in the per-view error banner.
    ///
    /// Application messages are shown verbatim; everything else collapses
    /// to the per-operation fallback while the cause goes to the log.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Application(msg) => msg.clone(),
            ClientError::Validation(msg) => msg.clone(),
            ClientError::InvalidCredentials => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
