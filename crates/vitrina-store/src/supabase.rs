//! Supabase PostgREST `rpc/exec_sql` executor.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vitrina_config::SupabaseConfig;
use vitrina_core::QueryResult;

use crate::{QueryExecutor, error::ExecutionError};

#[derive(Serialize)]
struct RpcRequest<'a> {
    sql: &'a str,
}

/// PostgREST error body (`code`, `details`, `hint` are ignored).
#[derive(Deserialize)]
struct PostgrestError {
    message: String,
}

/// Executor calling a read-only SQL procedure over PostgREST.
///
/// The project key is sent as both `apikey` and bearer token on every call.
#[derive(Debug, Clone)]
pub struct SupabaseExecutor {
    http: reqwest::Client,
    rpc_url: reqwest::Url,
}

impl SupabaseExecutor {
    /// Create an executor from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::InvalidEndpoint`] if the project URL cannot be
    /// parsed, [`ExecutionError::InvalidKey`] if the key is not a valid header
    /// value, or [`ExecutionError::Http`] if the HTTP client fails to build.
    pub fn new(config: &SupabaseConfig) -> Result<Self, ExecutionError> {
        let rpc_url = config.rpc_url();
        let rpc_url =
            reqwest::Url::parse(&rpc_url).map_err(|e| ExecutionError::InvalidEndpoint {
                endpoint: rpc_url.clone(),
                reason: e.to_string(),
            })?;

        let http = reqwest::Client::builder()
            .user_agent("vitrina/0.1")
            .default_headers(auth_headers(&config.key)?)
            .timeout(config.timeout())
            .build()
            .map_err(ExecutionError::Http)?;

        Ok(Self { http, rpc_url })
    }
}

fn auth_headers(key: &str) -> Result<HeaderMap, ExecutionError> {
    let sensitive = |value: &str| {
        let mut value = HeaderValue::from_str(value).map_err(|_| ExecutionError::InvalidKey)?;
        value.set_sensitive(true);
        Ok::<_, ExecutionError>(value)
    };

    let mut headers = HeaderMap::new();
    headers.insert("apikey", sensitive(key)?);
    headers.insert(AUTHORIZATION, sensitive(&format!("Bearer {key}"))?);
    Ok(headers)
}

impl QueryExecutor for SupabaseExecutor {
    async fn execute(&self, sql: &str) -> Result<QueryResult, ExecutionError> {
        tracing::debug!(sql, "calling exec_sql");

        let resp = self
            .http
            .post(self.rpc_url.clone())
            .json(&RpcRequest { sql })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(rejected(status.as_u16(), &body));
        }

        parse_success_body(&body)
    }
}

/// Build a [`ExecutionError::Rejected`] from a non-success response body.
///
/// Uses the PostgREST `message` field when present, otherwise the raw body.
fn rejected(status: u16, body: &str) -> ExecutionError {
    let message = serde_json::from_str::<PostgrestError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string());
    ExecutionError::Rejected { status, message }
}

/// Interpret a 2xx body.
///
/// Accepts a bare array of records (PostgREST), `null`, or an envelope of the
/// form `{ "data": [...] }` / `{ "error": { "message": ... } }`.
fn parse_success_body(body: &str) -> Result<QueryResult, ExecutionError> {
    if body.trim().is_empty() {
        return Ok(QueryResult::default());
    }

    let value: Value = serde_json::from_str(body).map_err(|e| ExecutionError::Parse(e.to_string()))?;

    let value = match value {
        Value::Object(mut envelope) => {
            if let Some(error) = envelope.remove("error").filter(|e| !e.is_null()) {
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .map_or_else(|| error.to_string(), str::to_string);
                return Err(ExecutionError::Rejected {
                    status: 200,
                    message,
                });
            }
            match envelope.remove("data") {
                Some(data) => data,
                None => {
                    return Err(ExecutionError::Parse(
                        "object body without 'data' or 'error'".into(),
                    ));
                }
            }
        }
        other => other,
    };

    Ok(QueryResult::from_value(value)?)
}
