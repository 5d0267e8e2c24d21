use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the chat-completion API
#[derive(Error, Debug)]
pub enum LlmApiError {
    /// Invalid request parameters (HTTP 400)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid or missing API key (HTTP 401)
    #[error("Invalid API key - authentication failed")]
    InvalidApiKey,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded - too many requests")]
    RateLimitExceeded,

    /// Server error from the API (HTTP 5xx)
    #[error("Server error ({0}): {1}")]
    ServerError(StatusCode, String),

    /// Unknown or unexpected error
    #[error("Unknown error ({0}): {1}")]
    UnknownError(StatusCode, String),
}

impl LlmApiError {
    /// Classify a non-success HTTP response.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => LlmApiError::InvalidRequest(body),
            StatusCode::UNAUTHORIZED => LlmApiError::InvalidApiKey,
            StatusCode::TOO_MANY_REQUESTS => LlmApiError::RateLimitExceeded,
            s if s.is_server_error() => LlmApiError::ServerError(s, body),
            s => LlmApiError::UnknownError(s, body),
        }
    }

    /// Returns true if this error is transient (a later request may succeed)
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LlmApiError::RateLimitExceeded | LlmApiError::ServerError(_, _)
        )
    }
}
