use serde::Serialize;

/// A selectable target language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered by the translator, in display order
pub const LANGUAGES: [Language; 8] = [
    Language { code: "en", name: "English" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "de", name: "German" },
    Language { code: "fr", name: "French" },
    Language { code: "ru", name: "Russian" },
    Language { code: "es", name: "Spanish" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
];

pub fn default_language() -> &'static Language {
    &LANGUAGES[0]
}

pub fn find_by_code(code: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
}

pub fn find_by_name(name: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|lang| lang.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_and_default() {
        let codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes, ["en", "vi", "de", "fr", "ru", "es", "ja", "ko"]);
        assert_eq!(default_language().name, "English");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_by_code("ES").map(|l| l.name), Some("Spanish"));
        assert_eq!(find_by_name(" japanese ").map(|l| l.code), Some("ja"));
        assert!(find_by_code("xx").is_none());
    }
}
