use serde::{Deserialize, Serialize};

/// Body of `POST /api/seo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoRequest {
    pub title: String,
}

/// Generated YouTube metadata, exactly as the backend produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoResult {
    /// Each entry is expected, not guaranteed, to start with `#`
    pub hashtags: Vec<String>,
    pub description: String,
    pub keywords: Vec<String>,
}
