//! Modeled pipeline outcomes and their fixed reply texts.
//!
//! Every outcome resolves to a normal [`ChatResponse`](crate::ChatResponse);
//! none of them is surfaced to the caller as an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply when the inbound message is empty.
pub const EMPTY_INPUT_REPLY: &str = "Envía un mensaje.";
/// Reply when the model produced no SQL text.
pub const GENERATION_FAILED_REPLY: &str = "No pude generar la consulta SQL.";
/// Reply when the generated statement is not a `SELECT`.
pub const INVALID_QUERY_REPLY: &str = "Solo se permiten consultas SELECT.";
/// Prefix of the reply when the datastore rejects the statement.
pub const EXECUTION_FAILURE_PREFIX: &str = "Error al ejecutar SQL: ";
/// Reply when no rows are found, after the optional correction retry.
pub const NO_RESULTS_REPLY: &str = "No se encontraron resultados.";
/// Reply when the model produced no summary for non-empty rows.
pub const SUMMARY_FAILURE_REPLY: &str = "No pude generar un resumen.";
/// Reply for failures outside the modeled kinds. Only the HTTP adapter emits it.
pub const INTERNAL_ERROR_REPLY: &str = "Error interno del servidor.";

/// Terminal state reached by one run of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Answered,
    EmptyInput,
    GenerationFailed,
    InvalidQuery,
    ExecutionFailure,
    NoResults,
    SummaryFailure,
}

impl Outcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::EmptyInput => "empty_input",
            Self::GenerationFailed => "generation_failed",
            Self::InvalidQuery => "invalid_query",
            Self::ExecutionFailure => "execution_failure",
            Self::NoResults => "no_results",
            Self::SummaryFailure => "summary_failure",
        }
    }

    /// Fixed reply text for outcomes whose reply does not depend on runtime data.
    ///
    /// Returns `None` for [`Outcome::Answered`] (the reply is the model's summary)
    /// and [`Outcome::ExecutionFailure`] (the reply embeds the datastore message).
    #[must_use]
    pub const fn fixed_reply(self) -> Option<&'static str> {
        match self {
            Self::EmptyInput => Some(EMPTY_INPUT_REPLY),
            Self::GenerationFailed => Some(GENERATION_FAILED_REPLY),
            Self::InvalidQuery => Some(INVALID_QUERY_REPLY),
            Self::NoResults => Some(NO_RESULTS_REPLY),
            Self::SummaryFailure => Some(SUMMARY_FAILURE_REPLY),
            Self::Answered | Self::ExecutionFailure => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the reply for a datastore error, keeping its message verbatim.
#[must_use]
pub fn execution_failure_reply(message: &str) -> String {
    format!("{EXECUTION_FAILURE_PREFIX}{message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_replies_cover_static_outcomes() {
        assert_eq!(Outcome::EmptyInput.fixed_reply(), Some(EMPTY_INPUT_REPLY));
        assert_eq!(Outcome::NoResults.fixed_reply(), Some(NO_RESULTS_REPLY));
        assert_eq!(Outcome::Answered.fixed_reply(), None);
        assert_eq!(Outcome::ExecutionFailure.fixed_reply(), None);
    }

    #[test]
    fn execution_failure_keeps_message_verbatim() {
        let reply = execution_failure_reply("relation \"producto\" does not exist");
        assert_eq!(
            reply,
            "Error al ejecutar SQL: relation \"producto\" does not exist"
        );
    }

    #[test]
    fn outcome_serializes_snake_case() {
        let json = serde_json::to_string(&Outcome::GenerationFailed).unwrap();
        assert_eq!(json, "\"generation_failed\"");
        assert_eq!(Outcome::NoResults.to_string(), "no_results");
    }
}
