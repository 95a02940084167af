//! Execution error types.

use thiserror::Error;

/// Errors that can occur when executing a statement remotely.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The datastore rejected the statement. `message` is its error text, verbatim.
    #[error("{message}")]
    Rejected {
        /// HTTP status of the rejecting response.
        status: u16,
        message: String,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The call did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    /// The response body was not a recognizable result.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured project key cannot be sent as a header value.
    #[error("project key is not a valid header value")]
    InvalidKey,

    /// The configured datastore URL is not valid.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl ExecutionError {
    /// Text shown to the user after "Error al ejecutar SQL: ".
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ExecutionError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Http(error)
        }
    }
}

impl From<vitrina_core::CoreError> for ExecutionError {
    fn from(error: vitrina_core::CoreError) -> Self {
        Self::Parse(error.to_string())
    }
}
