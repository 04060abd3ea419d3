//! Error types for the ResumeCheck API client.

use resumecheck_core::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the ResumeCheck API.
///
/// Authentication and authorization failures get their own variants so the
/// caller (usually the router) can decide where to navigate. The client never
/// navigates on its own.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// 401: the stored session was rejected and has been cleared
    #[error("Session expired, please sign in again")]
    AuthExpired,

    /// 403: the session is valid but lacks the required role
    #[error("Access denied")]
    Forbidden,

    /// Any other non-success status. `message` is the envelope message,
    /// empty when the body carried none.
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope reported `success: false`
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// Body did not match the expected envelope or payload shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Upload rejected locally before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message }
                if !message.is_empty() =>
            {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
