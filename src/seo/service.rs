use serde_json::{json, Value};
use tracing::{debug, error};

use super::interface::SeoResult;
use super::parser::parse_seo_response;
use crate::error::{FailureCause, Operation, OperationError};
use crate::llm::{GenerationRequest, GenerativeLlm};

pub fn build_seo_prompt(video_title: &str) -> String {
    format!(
        r#"Generate YouTube SEO metadata for a video with the title: "{video_title}".

Ensure the output is in the same language as the provided title.

1. Create 10-15 relevant hashtags.
2. Write a HIGHLY ENGAGING, formatted video description (approx 150 words).
   - Structure it clearly with headings or sections.
   - Use relevant EMOJIS (e.g., 🎥, 🔥, ✅, 👇) to make it visually popping.
   - Use BULLET POINTS for key takeaways or features.
   - Include a "Subscribe" call-to-action.
3. Generate 15-20 relevant keywords/tags."#
    )
}

/// Output schema sent with the request so the backend emits conforming JSON
pub fn seo_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of hashtags starting with #"
            },
            "description": {
                "type": "STRING",
                "description": "The formatted video description with emojis and bullets"
            },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of keywords for tags"
            }
        },
        "required": ["hashtags", "description", "keywords"]
    })
}

/// Generate metadata for `video_title` with one structured backend call
pub async fn generate_seo(
    llm: &dyn GenerativeLlm,
    video_title: &str,
) -> Result<SeoResult, OperationError> {
    let request = GenerationRequest::structured(build_seo_prompt(video_title), seo_response_schema());
    debug!("Generating SEO metadata for title: {}", video_title);

    let raw = llm.generate_content(request).await.map_err(|e| {
        error!("Error generating YouTube SEO: {}", e);
        OperationError::new(Operation::GenerateSeo, FailureCause::from(&e))
    })?;

    parse_seo_response(&raw).map_err(|e| {
        error!("Invalid SEO response from Gemini API: {} - Body: {}", e, raw);
        OperationError::new(Operation::GenerateSeo, FailureCause::from(&e))
    })
}
