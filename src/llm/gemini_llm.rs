use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::llm_interface::{GenerationRequest, GenerativeLlm};
use crate::config::GeminiConfig;
use crate::error::{ConfigError, LlmError};

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

impl GenerateContentRequest {
    pub fn from_generation(request: GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt),
                }],
                role: Some("user".to_string()),
            }],
            generation_config: request.response_schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        }
    }
}

impl GenerateContentResponse {
    /// Concatenate the text parts of the first candidate
    pub fn into_text(self) -> Result<String, LlmError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            debug!("Candidate had no text, finish_reason={:?}", candidate.finish_reason);
            return Err(LlmError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Google Gemini `generateContent` over HTTPS
#[derive(Debug, Clone)]
pub struct GeminiLlm {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiLlm {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("Initialized GeminiLlm: model={}, base_url={}", model, base_url);
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }

    /// Build from config, reading the credential from the process environment
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let api_key = resolve_api_key(config, |name| std::env::var(name).ok())?;
        Self::new(
            api_key,
            config.base_url.clone(),
            config.model.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Look up the credential in each configured variable, first non-blank wins
pub fn resolve_api_key<F>(config: &GeminiConfig, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    config
        .api_key_env
        .iter()
        .filter_map(|name| lookup(name))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or_else(|| ConfigError::MissingApiKey(config.api_key_env.join(" / ")))
}

#[async_trait]
impl GenerativeLlm for GeminiLlm {
    async fn generate_content(&self, request: GenerationRequest) -> Result<String, LlmError> {
        let structured = request.response_schema.is_some();
        let body = GenerateContentRequest::from_generation(request);

        debug!("Sending generateContent: model={}, structured={}", self.model, structured);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Gemini API error: {} - {}", status, text);
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::Malformed(e.to_string()))?;
        parsed.into_text()
    }
}
