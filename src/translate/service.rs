use tracing::{debug, error};

use crate::error::{FailureCause, Operation, OperationError};
use crate::llm::{GenerationRequest, GenerativeLlm};

/// Build the instruction prompt. `text` is embedded verbatim between `"""` markers.
pub fn build_translation_prompt(text: &str, target_language_name: &str) -> String {
    format!(
        "Translate the following text to {target_language_name}. \
Provide only the translated text, without any additional explanations, introductory phrases, or labels.

Text to translate:
\"\"\"
{text}
\"\"\"

Translation:"
    )
}

/// Translate `text` with one backend call and return the trimmed result.
///
/// Blank input is not checked here; callers reject it before calling.
pub async fn translate_text(
    llm: &dyn GenerativeLlm,
    text: &str,
    target_language_name: &str,
) -> Result<String, OperationError> {
    let prompt = build_translation_prompt(text, target_language_name);
    debug!("Translating {} chars to {}", text.chars().count(), target_language_name);

    match llm.generate_content(GenerationRequest::text(prompt)).await {
        Ok(response) => Ok(response.trim().to_string()),
        Err(e) => {
            error!("Error translating text with Gemini API: {}", e);
            Err(OperationError::new(Operation::Translate, FailureCause::from(&e)))
        }
    }
}
