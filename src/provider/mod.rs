//! Generation provider client.
//!
//! The provider is a stateless request/response abstraction: one prompt
//! plus a variation index in, one complete document markup out, or a
//! typed failure. The shipped implementation talks to a Gemini-style
//! `generateContent` endpoint; tests substitute their own
//! [`GenerationProvider`] impls.

pub mod extract;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::errors::ProviderError;
use crate::theme::Theme;

/// One generation request, immutable once issued.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The user's idea. Never empty: the flow refuses to build from an
    /// empty transcript.
    pub prompt: String,
    /// 1-based variation ordinal, stable for the lifetime of the round.
    pub variation_index: u32,
    /// Explicit theme to design for; `None` rotates the built-in sets.
    pub theme_hint: Option<Theme>,
}

impl GenerationRequest {
    pub fn new(prompt: &str, variation_index: u32, theme_hint: Option<Theme>) -> Self {
        Self {
            prompt: prompt.to_string(),
            variation_index,
            theme_hint,
        }
    }
}

/// A client that can produce app markup for a request.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}

/// Default endpoint for the shipped provider.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// Client for a Gemini `generateContent` endpoint.
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiProvider {
    /// Build a client. `request_timeout` of `None` means requests wait
    /// as long as the server takes, which is the default behavior.
    pub fn new(
        endpoint: &str,
        api_key: &str,
        request_timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        reqwest::Url::parse(endpoint)
            .map_err(|err| ProviderError::InvalidEndpoint(format!("{endpoint}: {err}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let prompt = prompts::build_variation_prompt(request);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "thinkingConfig": { "thinkingLevel": "low" }
            }
        });

        debug!(
            variation = request.variation_index,
            endpoint = %self.endpoint,
            "issuing generation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Transport(format!(
                "provider returned HTTP {status}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

        let text = parsed
            .first_text()
            .ok_or_else(|| {
                ProviderError::MalformedResponse("response contained no generated text".into())
            })?;

        Ok(extract::extract_markup(&text))
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, the only slot the
    /// endpoint populates for non-streaming single-candidate requests.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
