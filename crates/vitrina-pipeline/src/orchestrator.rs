//! End-to-end pipeline for one chat request.
//!
//! ```text
//! INIT ──(empty)──────────────────────────────────────────▶ EmptyInput
//!  │
//!  ▼
//! GENERATE_SQL ──(no text / model error)──────────────────▶ GenerationFailed
//!  │
//!  ▼
//! SANITIZE → VALIDATE ──(not SELECT)──────────────────────▶ InvalidQuery
//!  │
//!  ▼
//! EXECUTE ──(error)───────────────────────────────────────▶ ExecutionFailure
//!  │  └──(0 rows)──▶ RETRY ──(gave up)────────────────────▶ NoResults
//!  │                   └──(corrected rows)──┐
//!  ▼                                        ▼
//! SUMMARIZE ──(no text)───────────────────────────────────▶ SummaryFailure
//!  └──────────────────────────────────────────────────────▶ Answered
//! ```

use tracing::Instrument;
use vitrina_core::{ChatResponse, Outcome, QueryResult, outcome::execution_failure_reply};
use vitrina_model::ModelClient;
use vitrina_store::QueryExecutor;

use crate::retry::{RetryCoordinator, RetryOutcome};
use crate::summarizer::ResponseSummarizer;
use crate::{prompt, sanitizer};

/// Everything one request produced, for callers that log or display more
/// than the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub outcome: Outcome,
    /// Statement whose rows were summarized, or the last statement attempted.
    pub final_sql: Option<String>,
    /// Whether the correction retry ran.
    pub retried: bool,
    pub response: ChatResponse,
}

impl PipelineRun {
    fn terminal(outcome: Outcome, final_sql: Option<String>, retried: bool) -> Self {
        let reply = outcome.fixed_reply().unwrap_or_default();
        Self {
            outcome,
            final_sql,
            retried,
            response: ChatResponse::terminal(reply),
        }
    }
}

/// Sequences prompt building, generation, validation, execution, correction,
/// and summary for one request at a time.
///
/// Holds only its collaborators, so one instance can serve concurrent
/// requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Orchestrator<M, E> {
    model: M,
    executor: E,
}

impl<M: ModelClient, E: QueryExecutor> Orchestrator<M, E> {
    pub const fn new(model: M, executor: E) -> Self {
        Self { model, executor }
    }

    /// Answer `message`. Never fails: every modeled failure is a reply.
    pub async fn process(&self, message: &str) -> ChatResponse {
        self.run(message).await.response
    }

    /// Like [`Self::process`], keeping the outcome and final statement.
    pub async fn run(&self, message: &str) -> PipelineRun {
        let span = tracing::info_span!("chat", message_len = message.len());
        async {
            let run = self.run_inner(message.trim()).await;
            tracing::info!(
                outcome = %run.outcome,
                retried = run.retried,
                rows = run.response.data.len(),
                "request finished"
            );
            run
        }
        .instrument(span)
        .await
    }

    async fn run_inner(&self, message: &str) -> PipelineRun {
        if message.is_empty() {
            return PipelineRun::terminal(Outcome::EmptyInput, None, false);
        }

        let raw = match self.model.generate(&prompt::build_sql_prompt(message)).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::info!("model returned no SQL");
                return PipelineRun::terminal(Outcome::GenerationFailed, None, false);
            }
            Err(error) => {
                tracing::warn!(%error, "SQL generation failed");
                return PipelineRun::terminal(Outcome::GenerationFailed, None, false);
            }
        };

        let query = sanitizer::prepare(&raw);
        tracing::debug!(raw = %query.raw_text, sql = %query.sanitized_sql, "generated SQL");
        if !query.valid {
            return PipelineRun::terminal(Outcome::InvalidQuery, None, false);
        }

        let result = match self.executor.execute(&query.sanitized_sql).await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(%error, sql = %query.sanitized_sql, "execution failed");
                return PipelineRun {
                    outcome: Outcome::ExecutionFailure,
                    final_sql: Some(query.sanitized_sql),
                    retried: false,
                    response: ChatResponse::terminal(execution_failure_reply(&error.message())),
                };
            }
        };

        let (sql, result, retried) = if result.is_empty() {
            tracing::info!("no rows, attempting one correction");
            match RetryCoordinator::new(&self.model, &self.executor)
                .run(&query.sanitized_sql)
                .await
            {
                RetryOutcome::Corrected { query, result } => (query.sanitized_sql, result, true),
                RetryOutcome::GaveUp(_) => {
                    return PipelineRun::terminal(
                        Outcome::NoResults,
                        Some(query.sanitized_sql),
                        true,
                    );
                }
            }
        } else {
            (query.sanitized_sql, result, false)
        };

        self.summarize(message, sql, result, retried).await
    }

    async fn summarize(
        &self,
        message: &str,
        sql: String,
        result: QueryResult,
        retried: bool,
    ) -> PipelineRun {
        let summary = ResponseSummarizer::new(&self.model)
            .summarize(message, &sql, &result.rows)
            .await;
        let outcome = if summary.generated {
            Outcome::Answered
        } else {
            Outcome::SummaryFailure
        };

        PipelineRun {
            outcome,
            final_sql: Some(sql),
            retried,
            response: ChatResponse::answered(summary.reply, result.rows),
        }
    }
}
