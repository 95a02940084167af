//! # vitrina-model
//!
//! Single-call wrapper around a generative-text completion service.
//!
//! [`ModelClient`] is the seam the pipeline depends on; [`GeminiClient`] is the
//! production implementation speaking the Gemini `generateContent` protocol.
//! Each call makes exactly one HTTP request. There is no retry or backoff.

mod error;
mod gemini;
mod http;

pub use error::ModelError;
pub use gemini::GeminiClient;

use std::future::Future;

/// Text completion from a prompt.
///
/// Implementations must be safe for concurrent use by independent requests.
pub trait ModelClient: Send + Sync {
    /// Run one completion.
    ///
    /// Returns `Ok(None)` when the service answered successfully but supplied no
    /// candidate text. Returned text is trimmed and never empty.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on transport failure, timeout, non-success status,
    /// or an unparseable response body.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Option<String>, ModelError>> + Send;
}

impl<T: ModelClient> ModelClient for std::sync::Arc<T> {
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Option<String>, ModelError>> + Send {
        (**self).generate(prompt)
    }
}
