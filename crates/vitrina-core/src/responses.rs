//! Request and response shapes for the chat pipeline.
//!
//! [`ChatResponse`] is the only artifact returned to callers; the HTTP adapter
//! and `vitrina ask` serialize it as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// One datastore row: column name to JSON value, in the order the datastore
/// returned the columns.
pub type Record = Map<String, Value>;

/// Inbound chat message. A missing `message` field deserializes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// The message with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.message.trim()
    }
}

/// Final `{ reply, data }` pair returned for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub data: Vec<Record>,
}

impl ChatResponse {
    /// A reply without rows.
    #[must_use]
    pub fn terminal(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            data: Vec::new(),
        }
    }

    /// A reply carrying the rows it was generated from.
    #[must_use]
    pub fn answered(reply: impl Into<String>, data: Vec<Record>) -> Self {
        Self {
            reply: reply.into(),
            data,
        }
    }
}

/// One model generation attempt after sanitization and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuery {
    /// Text exactly as the model returned it.
    pub raw_text: String,
    /// Normalized statement handed to the executor when `valid`.
    pub sanitized_sql: String,
    /// Whether `sanitized_sql` passed the read-only check.
    pub valid: bool,
}

/// Rows returned by one successful execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub rows: Vec<Record>,
}

impl QueryResult {
    #[must_use]
    pub const fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a result from a JSON payload.
    ///
    /// `null` is an empty result. Anything else must be an array of objects.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ResultShape`] if the payload is not an array, or
    /// [`CoreError::RowShape`] if any element is not an object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let items = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) => items,
            other => return Err(CoreError::ResultShape(json_kind(&other).to_string())),
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(CoreError::RowShape {
                    index,
                    found: json_kind(&other).to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
