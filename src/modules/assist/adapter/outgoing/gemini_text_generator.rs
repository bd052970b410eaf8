// src/modules/assist/adapter/outgoing/gemini_text_generator.rs

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::assist::application::ports::outgoing::{TextGenerationError, TextGenerator};

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-1.0";
    pub const DEFAULT_API_BASE: &'static str =
        "https://generativelanguage.googleapis.com/v1beta";

    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_MODEL.to_string());

        Self {
            api_key,
            model,
            api_base: Self::DEFAULT_API_BASE.to_string(),
        }
    }
}

fn generate_url(config: &GeminiConfig, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        config.api_base, config.model, api_key
    )
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// The completion text lives at candidates[0].content.parts[0].text.
fn completion_text(body: &Value) -> String {
    body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[derive(Clone)]
pub struct GeminiTextGenerator {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiTextGenerator {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, TextGenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(TextGenerationError::MissingApiKey)?;

        let response = self
            .http
            .post(generate_url(&self.config, api_key))
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| TextGenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => body["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| body.to_string()),
                Err(e) => e.to_string(),
            };
            return Err(TextGenerationError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TextGenerationError::Transport(e.to_string()))?;
        Ok(completion_text(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(|k| k.to_string()),
            model: "gemini-1.0".into(),
            api_base: GeminiConfig::DEFAULT_API_BASE.into(),
        }
    }

    #[test]
    fn the_url_names_the_model_and_carries_the_key() {
        assert_eq!(
            generate_url(&config(Some("k")), "k"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.0:generateContent?key=k"
        );
    }

    #[test]
    fn the_request_wraps_the_prompt_in_parts() {
        let body = request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn completion_text_reads_the_first_candidate() {
        let body = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "  Subject: X\nBody: Y  "}]}}
            ]
        });
        assert_eq!(completion_text(&body), "Subject: X\nBody: Y");

        assert_eq!(completion_text(&serde_json::json!({})), "");
    }

    #[tokio::test]
    async fn a_missing_key_short_circuits_before_any_request() {
        let generator = GeminiTextGenerator::new(config(None));
        let err = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(err, TextGenerationError::MissingApiKey));
    }
}
