//! Application configuration as persisted in `config.json`

use serde::{Deserialize, Deserializer, Serialize};

fn default_language() -> String {
    "zh".to_string()
}

/// Older files store `"language": null`
fn language_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_language))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_language", deserialize_with = "language_or_default")]
    pub language: String,
    pub llm_base_url: Option<String>,
    pub llm_model: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: default_language(),
            llm_base_url: None,
            llm_model: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let config: AppConfig = serde_json::from_str(
            r#"{"apiKey": "k", "llmBaseUrl": "https://api.example.com", "llmModel": null}"#,
        )
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.language, "zh");
        assert_eq!(config.llm_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.llm_model, None);
    }

    #[test]
    fn test_null_language_keeps_other_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{"apiKey": "sk-old", "language": null, "llmModel": "qwen"}"#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-old"));
        assert_eq!(config.language, "zh");
        assert_eq!(config.llm_model.as_deref(), Some("qwen"));
    }
}
