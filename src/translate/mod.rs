pub mod interface;
pub mod service;

pub use interface::{TranslateRequest, TranslateResponse};
pub use service::{build_translation_prompt, translate_text};
