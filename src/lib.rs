pub mod config;
pub mod error;
pub mod handlers;
pub mod languages;
pub mod llm;
pub mod routes;
pub mod seo;
pub mod state;
pub mod translate;

pub use error::{ConfigError, FailureCause, LlmError, Operation, OperationError, SeoParseError};
pub use llm::{AiClient, GeminiLlm, GenerationRequest, GenerativeLlm};
pub use seo::SeoResult;
