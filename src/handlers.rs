use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::languages::{self, Language, LANGUAGES};
use crate::seo::{SeoRequest, SeoResult};
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};

pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to translate.";
pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a video title.";
pub const TRANSLATE_FAILED_MESSAGE: &str = "Failed to translate text. Please try again later.";
pub const SEO_FAILED_MESSAGE: &str = "Failed to generate SEO content. Please try again.";

type ApiError = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Report malformed or incomplete bodies in the same `{"error": ...}` shape
fn bad_body(rejection: JsonRejection) -> ApiError {
    warn!("Rejected request body: {}", rejection.body_text());
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_languages() -> Json<&'static [Language]> {
    Json(&LANGUAGES[..])
}

/// Pick the target language: code first, then display name, then the default
fn resolve_language(request: &TranslateRequest) -> Result<&'static Language, ApiError> {
    let code = request.target_language_code.as_deref().filter(|c| !c.trim().is_empty());
    let name = request.target_language.as_deref().filter(|n| !n.trim().is_empty());

    match (code, name) {
        (Some(code), _) => languages::find_by_code(code).ok_or_else(|| {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported language code: {}", code),
            )
        }),
        (None, Some(name)) => languages::find_by_name(name).ok_or_else(|| {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported language: {}", name),
            )
        }),
        (None, None) => Ok(languages::default_language()),
    }
}

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload.map_err(bad_body)?;
    if request.text.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, EMPTY_TEXT_MESSAGE));
    }
    let language = resolve_language(&request)?;

    match state.ai_client.translate(&request.text, language.name).await {
        Ok(translated_text) => {
            info!("Translated text to {}", language.name);
            Ok(Json(TranslateResponse { translated_text }))
        }
        Err(e) => {
            warn!("Translation failed: cause={:?}", e.cause());
            Err(error_response(StatusCode::BAD_GATEWAY, TRANSLATE_FAILED_MESSAGE))
        }
    }
}

pub async fn generate_seo(
    State(state): State<AppState>,
    payload: Result<Json<SeoRequest>, JsonRejection>,
) -> Result<Json<SeoResult>, ApiError> {
    let Json(request) = payload.map_err(bad_body)?;
    if request.title.trim().is_empty() {
        return Err(error_response(StatusCode::BAD_REQUEST, EMPTY_TITLE_MESSAGE));
    }

    match state.ai_client.generate_seo(&request.title).await {
        Ok(result) => {
            info!(
                "Generated SEO metadata: {} hashtags, {} keywords",
                result.hashtags.len(),
                result.keywords.len()
            );
            Ok(Json(result))
        }
        Err(e) => {
            warn!("SEO generation failed: cause={:?}", e.cause());
            Err(error_response(StatusCode::BAD_GATEWAY, SEO_FAILED_MESSAGE))
        }
    }
}
