use std::sync::Arc;

use crate::config::GeminiConfig;
use crate::error::{ConfigError, OperationError};
use crate::seo::{self, SeoResult};
use crate::translate;

use super::gemini_llm::GeminiLlm;
use super::llm_interface::GenerativeLlm;

/// The process-wide handle to the generative backend.
///
/// Holds no per-call state; cloning shares the same underlying connection pool.
#[derive(Clone)]
pub struct AiClient {
    llm: Arc<dyn GenerativeLlm>,
}

impl AiClient {
    pub fn new(llm: Arc<dyn GenerativeLlm>) -> Self {
        Self { llm }
    }

    /// Build the Gemini-backed client. Fails if the credential is absent.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let llm = GeminiLlm::from_config(config)?;
        Ok(Self::new(Arc::new(llm)))
    }

    /// Translate `text` into the named language
    pub async fn translate(
        &self,
        text: &str,
        target_language_name: &str,
    ) -> Result<String, OperationError> {
        translate::translate_text(self.llm.as_ref(), text, target_language_name).await
    }

    /// Generate hashtags, description and keywords for a video title
    pub async fn generate_seo(&self, video_title: &str) -> Result<SeoResult, OperationError> {
        seo::generate_seo(self.llm.as_ref(), video_title).await
    }
}
