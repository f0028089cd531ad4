//! Shared error types for the application

use thiserror::Error;

/// Main error type for memberdash operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failures talking to the member directory
    #[error("Directory request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success responses from the member directory
    #[error("Directory returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Member payload decoding errors
    #[error("Failed to decode member payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an API error from a response status and body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
