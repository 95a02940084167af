//! One-shot semantic correction after an empty result.
//!
//! When the first statement executes successfully but returns no rows, the
//! model gets exactly one chance to propose a corrected statement (plural or
//! spelling variants, an over-narrow filter). The corrected statement is
//! executed once. There is never a second round.

use vitrina_core::{GeneratedQuery, QueryResult};
use vitrina_model::ModelClient;
use vitrina_store::QueryExecutor;

use crate::prompt::{self, NO_CHANGE_SENTINEL};
use crate::sanitizer;

/// Why the correction attempt produced no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiveUpReason {
    /// The model answered without text.
    NoCandidate,
    /// The model call failed.
    ModelFailed,
    /// The model replied with the no-change sentinel.
    NoChange,
    /// The candidate is not a `SELECT` after sanitization.
    InvalidCandidate,
    /// The candidate was rejected by the datastore.
    ExecutionFailed,
    /// The candidate also returned zero rows.
    StillEmpty,
}

impl GiveUpReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoCandidate => "no_candidate",
            Self::ModelFailed => "model_failed",
            Self::NoChange => "no_change",
            Self::InvalidCandidate => "invalid_candidate",
            Self::ExecutionFailed => "execution_failed",
            Self::StillEmpty => "still_empty",
        }
    }
}

/// Result of the single correction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome {
    /// The corrected statement returned rows; it replaces the original downstream.
    Corrected {
        query: GeneratedQuery,
        result: QueryResult,
    },
    GaveUp(GiveUpReason),
}

/// Runs the correction policy against borrowed collaborators.
pub struct RetryCoordinator<'a, M, E> {
    model: &'a M,
    executor: &'a E,
}

impl<'a, M: ModelClient, E: QueryExecutor> RetryCoordinator<'a, M, E> {
    pub const fn new(model: &'a M, executor: &'a E) -> Self {
        Self { model, executor }
    }

    /// Attempt one correction of `original_sql`, which returned zero rows.
    ///
    /// Makes at most one model call and at most one execution.
    pub async fn run(&self, original_sql: &str) -> RetryOutcome {
        let retry_prompt = prompt::build_retry_prompt(original_sql);

        let raw = match self.model.generate(&retry_prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => return Self::give_up(GiveUpReason::NoCandidate),
            Err(error) => {
                tracing::warn!(%error, "correction request failed");
                return Self::give_up(GiveUpReason::ModelFailed);
            }
        };

        let candidate = sanitizer::prepare(&raw);
        if candidate.sanitized_sql == NO_CHANGE_SENTINEL {
            return Self::give_up(GiveUpReason::NoChange);
        }
        if !candidate.valid {
            tracing::debug!(raw = %candidate.raw_text, "correction is not a SELECT");
            return Self::give_up(GiveUpReason::InvalidCandidate);
        }

        tracing::debug!(sql = %candidate.sanitized_sql, "executing corrected query");
        match self.executor.execute(&candidate.sanitized_sql).await {
            Ok(result) if result.is_empty() => Self::give_up(GiveUpReason::StillEmpty),
            Ok(result) => {
                tracing::info!(
                    rows = result.row_count(),
                    sql = %candidate.sanitized_sql,
                    "correction returned rows"
                );
                RetryOutcome::Corrected {
                    query: candidate,
                    result,
                }
            }
            Err(error) => {
                tracing::warn!(%error, "corrected query failed");
                Self::give_up(GiveUpReason::ExecutionFailed)
            }
        }
    }

    fn give_up(reason: GiveUpReason) -> RetryOutcome {
        tracing::info!(reason = reason.as_str(), "correction gave up");
        RetryOutcome::GaveUp(reason)
    }
}
