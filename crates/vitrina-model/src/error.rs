//! Model client error types.

use thiserror::Error;

/// Errors that can occur when calling the generative-text service.
///
/// A successful call that carries no candidate text is not an error; see
/// [`ModelClient::generate`](crate::ModelClient::generate).
#[derive(Debug, Error)]
pub enum ModelError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The call did not complete within the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Failed to parse the response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured API key cannot be sent as a header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

// The URL is dropped so error text stays safe to log.
impl From<reqwest::Error> for ModelError {
    fn from(error: reqwest::Error) -> Self {
        let error = error.without_url();
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Http(error)
        }
    }
}
