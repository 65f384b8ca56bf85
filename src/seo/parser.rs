use serde_json::{Map, Value};

use super::interface::SeoResult;
use crate::error::SeoParseError;

const FENCE: &str = "```";

/// Remove a markdown code fence wrapping the body, if there is one.
///
/// Only an opening line of exactly "```" or "```json" counts as a fence.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    let Some(after_open) = text.strip_prefix(FENCE) else {
        return text;
    };

    let (tag, body) = match after_open.find('\n') {
        Some(idx) => (&after_open[..idx], &after_open[idx + 1..]),
        None => (after_open, ""),
    };
    let tag = tag.trim_end_matches('\r');
    if !(tag.is_empty() || tag == "json") {
        return text;
    }

    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Parse and validate the raw SEO response text
pub fn parse_seo_response(raw: &str) -> Result<SeoResult, SeoParseError> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))?;
    let obj = value.as_object().ok_or(SeoParseError::NotAnObject)?;

    Ok(SeoResult {
        hashtags: string_array(obj, "hashtags")?,
        description: string_field(obj, "description")?,
        keywords: string_array(obj, "keywords")?,
    })
}

fn string_field(obj: &Map<String, Value>, field: &'static str) -> Result<String, SeoParseError> {
    match obj.get(field) {
        None => Err(SeoParseError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(SeoParseError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn string_array(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, SeoParseError> {
    let wrong_type = || SeoParseError::WrongType {
        field,
        expected: "an array of strings",
    };

    let items = match obj.get(field) {
        None => return Err(SeoParseError::MissingField(field)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(wrong_type()),
    };

    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(wrong_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r##"{"hashtags":["#a"],"description":"d","keywords":["k"]}"##;

    #[test]
    fn fenced_and_unfenced_parse_identically() {
        let fenced = format!("```json\n{}\n```", BODY);
        assert_eq!(strip_code_fence(&fenced), BODY);
        assert_eq!(
            parse_seo_response(&fenced).unwrap(),
            parse_seo_response(BODY).unwrap()
        );

        let bare_fence = format!("  ```\n{}\n```  \n", BODY);
        assert_eq!(strip_code_fence(&bare_fence), BODY);
    }

    #[test]
    fn stripping_is_idempotent() {
        let fenced = format!("```json\r\n{}\r\n```", BODY);
        let once = strip_code_fence(&fenced);
        assert_eq!(strip_code_fence(once), once);
        assert_eq!(once, BODY);
    }

    #[test]
    fn unknown_fence_tag_is_left_alone() {
        let text = "```yaml\nfoo: bar\n```";
        assert_eq!(strip_code_fence(text), text);
    }

    #[test]
    fn entries_are_not_reformatted() {
        let raw = r##"{"hashtags":[" #spaced ","nohash"],"description":"line1\n\nline2 🎥","keywords":["  k  "]}"##;
        let result = parse_seo_response(raw).unwrap();
        assert_eq!(result.hashtags, vec![" #spaced ", "nohash"]);
        assert_eq!(result.description, "line1\n\nline2 🎥");
        assert_eq!(result.keywords, vec!["  k  "]);
    }

    #[test]
    fn missing_field_is_rejected() {
        let raw = r##"{"hashtags":["#a"],"description":"d"}"##;
        assert!(matches!(
            parse_seo_response(raw),
            Err(SeoParseError::MissingField("keywords"))
        ));
    }

    #[test]
    fn wrong_types_are_rejected() {
        let raw = r##"{"hashtags":"#a","description":"d","keywords":[]}"##;
        assert!(matches!(
            parse_seo_response(raw),
            Err(SeoParseError::WrongType { field: "hashtags", .. })
        ));

        let raw = r##"{"hashtags":[],"description":["d"],"keywords":[]}"##;
        assert!(matches!(
            parse_seo_response(raw),
            Err(SeoParseError::WrongType { field: "description", .. })
        ));

        let raw = r##"{"hashtags":[],"description":"d","keywords":[1, 2]}"##;
        assert!(matches!(
            parse_seo_response(raw),
            Err(SeoParseError::WrongType { field: "keywords", .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_seo_response("{\"hashtags\": ["),
            Err(SeoParseError::Json(_))
        ));
        assert!(matches!(
            parse_seo_response("[1, 2, 3]"),
            Err(SeoParseError::NotAnObject)
        ));
    }
}
