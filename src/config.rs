use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub gemini_config: GeminiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built front end, served at `/` when present
    #[serde(default)]
    pub static_dir: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variables checked, in order, for the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Vec<String>,
    /// Request timeout; `None` keeps the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> Vec<String> {
    vec!["API_KEY".to_string(), "GEMINI_API_KEY".to_string()]
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }
        let content = load_text_file(path)?;
        let is_json = path.to_lowercase().ends_with(".json");
        Self::parse(&content, is_json)
    }

    /// Parse config text after `${VAR}` substitution
    pub fn parse(content: &str, is_json: bool) -> Result<Self> {
        let content = substitute_env_vars(content, |name| std::env::var(name).ok());
        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }
}

/// Replace `${VAR_NAME}` with the variable's value. Unknown variables are left as-is.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").expect("static pattern"));
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Read a text file, dropping a UTF-8 BOM and decoding invalid UTF-8 lossily
pub fn load_text_file(path: &str) -> Result<String> {
    let mut bytes = fs::read(path)?;
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            let (cow, _, _) = encoding_rs::UTF_8.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_empty_sections() {
        let config = Config::parse("system_config: {}\n", false).unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.gemini_config.model, "gemini-2.5-flash");
        assert_eq!(config.gemini_config.api_key_env, vec!["API_KEY", "GEMINI_API_KEY"]);
        assert!(config.gemini_config.timeout_secs.is_none());
    }

    #[test]
    fn yaml_and_json_both_load() {
        let yaml = "system_config:\n  port: 9000\n  static_dir: dist\ngemini_config:\n  model: gemini-pro\n";
        let config = Config::parse(yaml, false).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.static_dir.as_deref(), Some("dist"));
        assert_eq!(config.gemini_config.model, "gemini-pro");

        let json = r#"{"gemini_config": {"timeout_secs": 30}}"#;
        let config = Config::parse(json, true).unwrap();
        assert_eq!(config.gemini_config.timeout_secs, Some(30));
        assert_eq!(config.system_config.host, "0.0.0.0");
    }

    #[test]
    fn env_placeholders_are_substituted() {
        let out = substitute_env_vars("model: ${MODEL}\nkey: ${UNSET}", |name| {
            (name == "MODEL").then(|| "gemini-2.0-flash".to_string())
        });
        assert_eq!(out, "model: gemini-2.0-flash\nkey: ${UNSET}");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("does/not/exist.yaml").is_err());
    }

    #[test]
    fn load_strips_bom_and_tolerates_invalid_utf8() {
        let path = std::env::temp_dir().join(format!("gemini-suite-{}.yaml", uuid::Uuid::new_v4()));
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"system_config:\n  port: 9001\n# \xff\xfe\n");
        fs::write(&path, &bytes).unwrap();

        let text = load_text_file(path.to_str().unwrap()).unwrap();
        assert!(text.starts_with("system_config:"));
        assert!(text.contains('\u{FFFD}'));

        let loaded = Config::load(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().system_config.port, 9001);
    }
}
