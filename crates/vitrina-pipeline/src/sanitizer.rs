//! Normalization and read-only validation of model-produced SQL.
//!
//! This is a syntactic guard, not a SQL parser: it removes markdown wrapping
//! and stray punctuation, then accepts only statements that start with
//! `select`.

use std::sync::LazyLock;

use regex::Regex;
use vitrina_core::GeneratedQuery;

static FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```sql|```").expect("Invalid regex"));
static EDGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s(]+|[\s)]+$").expect("Invalid regex"));
static TRAILING_SEMICOLON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:;\s*)+$").expect("Invalid regex"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Normalize raw model output into a single-line statement.
///
/// Steps, in order: drop code fences, trim leading `(`/whitespace and
/// trailing `)`/whitespace, drop trailing semicolons, collapse whitespace
/// runs, trim.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let text = FENCE_PATTERN.replace_all(raw, "");
    let text = EDGE_PATTERN.replace_all(&text, "");
    let text = TRAILING_SEMICOLON_PATTERN.replace(&text, "");
    let text = WHITESPACE_PATTERN.replace_all(&text, " ");
    text.trim().to_string()
}

/// True iff `sql` starts with `select`, ignoring ASCII case.
#[must_use]
pub fn validate(sql: &str) -> bool {
    sql.get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("select"))
}

/// Sanitize and validate one generation attempt.
#[must_use]
pub fn prepare(raw: &str) -> GeneratedQuery {
    let sanitized_sql = sanitize(raw);
    let valid = validate(&sanitized_sql);
    GeneratedQuery {
        raw_text: raw.to_string(),
        sanitized_sql,
        valid,
    }
}
