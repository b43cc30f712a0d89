//! Gemini generateContent provider.

use crate::llm::provider::TextCompletion;
use crate::llm::types::{CompletionError, CompletionRequest, CompletionResponse, TokenUsage};
use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Default Gemini API endpoint
const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

/// Gemini API request
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini API response
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<GeminiUsage>,
    #[serde(rename = "modelVersion")]
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

/// Gemini API error response
#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// The text of the first candidate's first part, if any.
fn extract_candidate_text(response: &GeminiResponse) -> Option<String> {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.clone())
}

/// A structured API error message when the body carries one, the raw body
/// otherwise.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiErrorBody>(body)
        .map(|decoded| decoded.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// HTTP-backed Gemini provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider with an API key against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Set a custom endpoint URL (also selects the model, which is part of
    /// the generateContent path).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl TextCompletion for GeminiProvider {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> BoxFuture<'_, Result<CompletionResponse, CompletionError>> {
        Box::pin(async move {
            let request_id = request.id;
            let url = Url::parse_with_params(&self.base_url, [("key", self.api_key.as_str())])?;

            let body = GeminiRequest {
                contents: vec![GeminiContent {
                    parts: vec![GeminiPart {
                        text: request.prompt,
                    }],
                }],
                generation_config: match (request.temperature, request.max_output_tokens) {
                    (None, None) => None,
                    (temperature, max_output_tokens) => Some(GenerationConfig {
                        temperature,
                        max_output_tokens,
                    }),
                },
            };

            debug!("POST {} (request {})", self.base_url, request_id);

            let response = self.client.post(url).json(&body).send().await?;
            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.unwrap_or_default();
                return Err(CompletionError::Api {
                    status: status.as_u16(),
                    message: api_error_message(&body_text),
                });
            }

            let parsed: GeminiResponse = response.json().await?;
            let content =
                extract_candidate_text(&parsed).ok_or(CompletionError::EmptyCandidates)?;

            Ok(CompletionResponse {
                request_id,
                content,
                model: parsed
                    .model_version
                    .unwrap_or_else(|| "gemini".to_string()),
                usage: parsed.usage_metadata.map(|usage| TokenUsage {
                    input_tokens: usage.prompt_token_count,
                    output_tokens: usage.candidates_token_count,
                }),
            })
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
