//! HTTP client for the Gemini `generateContent` REST API.
//!
//! Wraps a single endpoint: `POST /v1beta/models/{model}:generateContent`.
//! The API key travels as a query parameter, per the Gemini REST
//! convention. Implements [`TextGenerator`] so the API crate can swap
//! in a stub for tests.

use serde::{Deserialize, Serialize};

use cinelens_core::error::CoreError;
use cinelens_core::generate::TextGenerator;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for one Gemini model.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response decoded but carried no candidate text.
    #[error("Gemini response contained no candidate text")]
    EmptyResponse,
}

impl GeminiClient {
    /// Create a client for `model` authenticated with `api_key`,
    /// talking to [`DEFAULT_BASE_URL`].
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a non-default base URL (local proxies,
    /// test servers).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Model identifier this client targets (e.g. `gemini-2.0-flash`).
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a completion for `prompt`.
    ///
    /// Returns the text of the first candidate part. A decoded response
    /// with no candidates (safety-blocked prompts produce these) is an
    /// [`GeminiError::EmptyResponse`].
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateContentResponse = response.json().await?;

        decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(GeminiError::EmptyResponse)
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, CoreError> {
        self.generate_content(prompt).await.map_err(|e| {
            tracing::warn!(model = %self.model, error = %e, "Gemini generation failed");
            CoreError::Generation(e.to_string())
        })
    }
}
