pub mod llm_interface;
pub mod gemini_llm;
pub mod ai_client;

#[cfg(test)]
pub(crate) mod testing;

pub use llm_interface::*;
pub use gemini_llm::GeminiLlm;
pub use ai_client::AiClient;
