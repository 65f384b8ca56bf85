use crate::config::Config;
use crate::error::ConfigError;
use crate::llm::AiClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ai_client: AiClient,
}

impl AppState {
    /// Build state with the Gemini-backed client. Fails if no API key is set.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let ai_client = AiClient::from_config(&config.gemini_config)?;
        Ok(Self::with_client(config, ai_client))
    }

    pub fn with_client(config: Config, ai_client: AiClient) -> Self {
        Self { config, ai_client }
    }
}
