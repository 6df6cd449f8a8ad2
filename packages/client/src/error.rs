//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message} ({status})")]
    Api { status: StatusCode, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not in local state: {0}")]
    UnknownEntity(String),

    #[error("Still being saved: {0}")]
    Provisional(String),
}

impl ClientError {
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_and_status() {
        let err = ClientError::api(StatusCode::NOT_FOUND, "Task not found.");
        assert_eq!(err.to_string(), "Task not found. (404 Not Found)");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        assert_eq!(ClientError::Network("refused".into()).status(), None);
        assert_eq!(ClientError::Validation("x".into()).status(), None);
    }
}
