//! Gemini completion client
//!
//! Sends the system instruction and user message as a single text part to
//! `<endpoint>/models/<model>:generateContent` and extracts
//! `candidates[0].content.parts[0].text` from the reply.

use crate::config::{CompletionConfig, SamplingConfig, API_KEY_ENV};
use crate::error::CompletionError;
use crate::service::CompletionService;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl GeminiClient {
    /// Create client
    ///
    /// No request timeout is set; a hung upstream call hangs the caller.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CompletionError::Configuration(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Create client over a preconfigured HTTP client (proxies, TLS roots)
    #[inline]
    #[must_use]
    pub fn with_http_client(config: CompletionConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(&self, system_prompt: &str, user_message: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: format!("{system_prompt}\n\n{user_message}"),
                }],
            }],
            generation_config: GenerationConfig::from(self.config.sampling),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_k: u32,
    top_p: f32,
}

impl From<SamplingConfig> for GenerationConfig {
    fn from(sampling: SamplingConfig) -> Self {
        Self {
            temperature: sampling.temperature,
            max_output_tokens: sampling.max_output_tokens,
            top_k: sampling.top_k,
            top_p: sampling.top_p,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}

/// Pull the completion text out of a success body
fn extract_text(body: &str) -> Result<String, CompletionError> {
    let parsed: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    parsed.into_text().ok_or_else(|| {
        CompletionError::MalformedResponse(
            "missing candidates[0].content.parts[0].text".to_string(),
        )
    })
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CompletionError> {
        let api_key = self.config.credential().ok_or_else(|| {
            CompletionError::Configuration(format!("{API_KEY_ENV} environment variable not set"))
        })?;

        let body = self.build_request(system_prompt, user_message);
        tracing::debug!(
            model = %self.config.model,
            prompt_chars = body.contents[0].parts[0].text.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(self.build_url())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Service(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::Service(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(%status, "completion request failed");
            return Err(CompletionError::Service(format!("HTTP {status}: {text}")));
        }

        let completion = extract_text(&text)?;
        tracing::debug!(completion_chars = completion.len(), "completion received");
        Ok(completion)
    }
}
