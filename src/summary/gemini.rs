//! Gemini `generateContent` client

use crate::config::SummarizerConfig;
use crate::summary::TextGenerator;
use crate::DevCardError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Environment variable consulted when the config carries no key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Text generation backed by Google's Gemini API
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client; the key comes from config, else `GEMINI_API_KEY`
    ///
    /// Every generation call is bounded by the configured timeout.
    pub fn new(config: &SummarizerConfig) -> Result<Self, DevCardError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty());

        if api_key.is_none() {
            tracing::warn!("No Gemini API key configured; summaries will fail");
        }

        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, DevCardError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DevCardError::Summarization(format!("{} is not set", API_KEY_ENV)))?;

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!("Requesting summary from model {}", self.model);
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| DevCardError::Summarization(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DevCardError::Summarization(format!(
                "model returned HTTP {}",
                status.as_u16()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DevCardError::Summarization(e.to_string()))?;

        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(DevCardError::Summarization(
                "model returned no text".to_string(),
            ));
        }

        Ok(text)
    }
}
