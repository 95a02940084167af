//! Gemini generative-language API configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_base_url() -> String {
    String::from("https://generativelanguage.googleapis.com/v1")
}

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

/// Default per-call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key passed as the `key` query parameter.
    #[serde(default)]
    pub api_key: String,

    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name used in `models/{model}:generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound for one `generateContent` call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is available.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full `generateContent` endpoint, without the key parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
