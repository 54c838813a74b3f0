//! Error types for the site controllers.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when submitting to the contact API.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error(
        "API error (status {status}): {}",
        .message.as_deref().unwrap_or("no message")
    )]
    ApiError {
        status: u16,
        message: Option<String>,
    },

    /// API answered with a status other than 201 Created
    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// Failed to build or parse JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

impl ContactApiError {
    /// The human-readable message supplied by the server, if any.
    ///
    /// Empty messages are treated as absent.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::ApiError {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
