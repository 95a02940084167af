//! Supabase (PostgREST) datastore configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_rpc_function() -> String {
    String::from("exec_sql")
}

/// Default per-call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// API key sent as `apikey` and bearer token.
    #[serde(default)]
    pub key: String,

    /// Read-only procedure that executes one statement.
    #[serde(default = "default_rpc_function")]
    pub rpc_function: String,

    /// Upper bound for one procedure call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: String::new(),
            rpc_function: default_rpc_function(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SupabaseConfig {
    /// Check if the URL and key are both set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.key.is_empty()
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// PostgREST endpoint for the configured procedure.
    pub fn rpc_url(&self) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.url.trim_end_matches('/'),
            self.rpc_function
        )
    }
}
