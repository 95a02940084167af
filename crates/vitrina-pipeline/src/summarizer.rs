//! Natural-language summary of the final rows.

use vitrina_core::{Record, outcome::SUMMARY_FAILURE_REPLY};
use vitrina_model::ModelClient;

use crate::prompt;

/// Reply produced for the caller, and whether the model actually wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub reply: String,
    /// False when `reply` is the fixed fallback text.
    pub generated: bool,
}

/// Turns rows into an answer. Never fails.
pub struct ResponseSummarizer<'a, M> {
    model: &'a M,
}

impl<'a, M: ModelClient> ResponseSummarizer<'a, M> {
    pub const fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Summarize `rows`, produced by `sql`, as an answer to `message`.
    ///
    /// Falls back to a fixed reply if the model returns no text or fails.
    pub async fn summarize(&self, message: &str, sql: &str, rows: &[Record]) -> Summary {
        let summary_prompt = prompt::build_summary_prompt(message, sql, rows);
        match self.model.generate(&summary_prompt).await {
            Ok(Some(reply)) => Summary {
                reply,
                generated: true,
            },
            Ok(None) => Self::fallback(),
            Err(error) => {
                tracing::warn!(%error, "summary request failed");
                Self::fallback()
            }
        }
    }

    fn fallback() -> Summary {
        Summary {
            reply: SUMMARY_FAILURE_REPLY.to_string(),
            generated: false,
        }
    }
}
