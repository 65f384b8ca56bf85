use serde::{Deserialize, Serialize};

/// Body of `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Display name, e.g. "Spanish"
    #[serde(default)]
    pub target_language: Option<String>,
    /// Catalog code, e.g. "es". Takes precedence over the name.
    #[serde(default)]
    pub target_language_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}
