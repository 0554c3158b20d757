//! GeminiProvider -- concrete [`LlmProvider`] implementation for the Google
//! Gemini generative API.
//!
//! Sends one `models/{model}:generateContent` request per invocation with
//! the API key in the `x-goog-api-key` header. No retries, no streaming;
//! the configured client timeout surfaces as a transport error.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use secrecy::{ExposeSecret, SecretString};

use ecobot_core::llm::LlmProvider;
use ecobot_types::config::GeminiConfig;
use ecobot_types::error::LlmError;
use ecobot_types::llm::UserContent;

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part,
};

/// Gemini gateway provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider from config.
    pub fn new(api_key: SecretString, config: &GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for tests and proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build the request body: the fixed prompt followed by the user content,
    /// as parts of a single content entry.
    fn build_request(system_prompt: &str, content: &UserContent) -> GenerateContentRequest {
        let user_part = match content {
            UserContent::Text(text) => Part::Text { text: text.clone() },
            UserContent::Image { data, mime_type } => Part::InlineData {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: BASE64.encode(data),
                },
            },
        };

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: system_prompt.to_string(),
                    },
                    user_part,
                ],
            }],
        }
    }

    /// Pull the first candidate's text out of a response, trimmed.
    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.text))
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::MissingContent);
        }
        Ok(text)
    }
}

// GeminiProvider intentionally does not derive Debug; the SecretString field
// already refuses to print, and omitting Debug keeps the rest of the request
// state out of logs too.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(
        &self,
        system_prompt: &str,
        content: &UserContent,
    ) -> Result<String, LlmError> {
        let body = Self::build_request(system_prompt, content);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "Gemini API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Http(format!("failed to decode response: {e}")))?;

        Self::extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::gemini::types::{Candidate, CandidateContent, ResponsePart};

    fn provider() -> GeminiProvider {
        GeminiProvider::new("test-key".into(), &GeminiConfig::default())
    }

    #[test]
    fn test_url_includes_model() {
        let p = provider();
        assert_eq!(
            p.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_build_request_text() {
        let req = GeminiProvider::build_request("prompt", &UserContent::text("hi"));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(json["contents"][0]["parts"][1]["text"], "hi");
    }

    #[test]
    fn test_build_request_image_is_base64() {
        let req = GeminiProvider::build_request(
            "prompt",
            &UserContent::image(b"hello".to_vec(), "image/png"),
        );
        let json = serde_json::to_value(&req).unwrap();
        let part = &json["contents"][0]["parts"][1]["inline_data"];
        assert_eq!(part["mime_type"], "image/png");
        assert_eq!(part["data"], "aGVsbG8=");
    }

    #[test]
    fn test_extract_text_trims_reply() {
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: Some("  Recyclable\n".to_string()),
                    }],
                }),
            }],
        };
        assert_eq!(GeminiProvider::extract_text(resp).unwrap(), "Recyclable");
    }

    #[test]
    fn test_extract_text_no_candidates_is_missing_content() {
        let resp = GenerateContentResponse {
            candidates: Vec::new(),
        };
        assert!(matches!(
            GeminiProvider::extract_text(resp),
            Err(LlmError::MissingContent)
        ));
    }
}
