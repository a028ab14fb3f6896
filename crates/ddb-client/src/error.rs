//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a 4xx or 5xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A success response carried a body that is not JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code associated with the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Human-readable message for display to a user.
    ///
    /// API errors yield the server's message on its own. Transport errors
    /// include the full cause chain, since reqwest keeps the interesting
    /// part (e.g. "Connection refused") in its sources.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::Request(err) => {
                let mut message = format!("Request failed: {}", err);
                let mut source = std::error::Error::source(err);
                while let Some(cause) = source {
                    message.push_str(": ");
                    message.push_str(&cause.to_string());
                    source = cause.source();
                }
                message
            }
            other => other.to_string(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this is a conflict (e.g. duplicate collection or key).
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
