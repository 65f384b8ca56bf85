use async_trait::async_trait;

use crate::error::LlmError;

/// A single generation call: the prompt plus an optional JSON output schema
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationRequest {
    /// Plain-text request with no output constraint
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    /// Request constrained to JSON matching `schema`
    pub fn structured(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// Interface for a stateless generative language model.
/// Stateless means nothing is remembered between calls.
#[async_trait]
pub trait GenerativeLlm: Send + Sync {
    /// Issue exactly one request and return the raw response text
    async fn generate_content(&self, request: GenerationRequest) -> Result<String, LlmError>;
}
