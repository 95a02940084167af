//! Gemini `generateContent` client.

use serde::{Deserialize, Serialize};
use vitrina_config::GeminiConfig;

use crate::{ModelClient, error::ModelError, http::check_response};

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    const fn new(prompt: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

// Every level of the response is optional; a missing level means "no text".
#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text at `candidates[0].content.parts[0].text`, trimmed, if non-empty.
    fn first_text(self) -> Option<String> {
        let text = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text?;
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini generative-language API.
///
/// The API key travels in the `x-goog-api-key` header, never in the URL, so
/// transport errors and logs cannot carry it.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// The configured timeout bounds every call made through this client.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidEndpoint`] if the endpoint URL cannot be
    /// parsed, [`ModelError::InvalidApiKey`] if the key is not a valid header
    /// value, or [`ModelError::Http`] if the HTTP client fails to build.
    pub fn new(config: &GeminiConfig) -> Result<Self, ModelError> {
        let endpoint = config.endpoint();
        let endpoint = reqwest::Url::parse(&endpoint).map_err(|e| ModelError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let mut api_key = reqwest::header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| ModelError::InvalidApiKey)?;
        api_key.set_sensitive(true);
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .user_agent("vitrina/0.1")
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(ModelError::Http)?;

        Ok(Self { http, endpoint })
    }
}

impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ModelError> {
        tracing::debug!(prompt_len = prompt.len(), "calling generateContent");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| ModelError::Parse(e.to_string()))?;

        let text = parsed.first_text();
        if text.is_none() {
            tracing::debug!("generateContent returned no candidate text");
        }
        Ok(text)
    }
}
