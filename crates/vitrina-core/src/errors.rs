//! Cross-cutting error types for Vitrina.
//!
//! Client-specific errors (`ModelError`, `ExecutionError`, `ConfigError`) live
//! in their own crates. They converge with `anyhow` in `vitrina-cli`.

use thiserror::Error;

/// Errors that can be raised while shaping data shared between crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A datastore payload did not have the expected shape.
    #[error("Unexpected row shape at index {index}: expected a JSON object, got {found}")]
    RowShape { index: usize, found: String },

    /// The payload was not a sequence of records.
    #[error("Unexpected result shape: expected a JSON array, got {0}")]
    ResultShape(String),
}
