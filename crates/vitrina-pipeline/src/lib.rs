//! # vitrina-pipeline
//!
//! Natural-language question to SQL to natural-language answer.
//!
//! The pipeline for one request:
//! 1. Build the SQL-generation prompt (`prompt`)
//! 2. Ask the model for one statement (`vitrina_model::ModelClient`)
//! 3. Sanitize and validate it (`sanitizer`)
//! 4. Execute it (`vitrina_store::QueryExecutor`)
//! 5. On zero rows, attempt one semantic correction (`retry`)
//! 6. Summarize the rows (`summarizer`)
//!
//! [`Orchestrator::process`] sequences these steps and always returns a
//! [`ChatResponse`](vitrina_core::ChatResponse); every modeled failure becomes
//! a reply text.

pub mod orchestrator;
pub mod prompt;
pub mod retry;
pub mod sanitizer;
pub mod summarizer;

pub use orchestrator::{Orchestrator, PipelineRun};
pub use retry::{GiveUpReason, RetryCoordinator, RetryOutcome};
pub use summarizer::{ResponseSummarizer, Summary};
