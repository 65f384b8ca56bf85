pub mod interface;
pub mod parser;
pub mod service;

pub use interface::{SeoRequest, SeoResult};
pub use parser::{parse_seo_response, strip_code_fence};
pub use service::{build_seo_prompt, generate_seo, seo_response_schema};
