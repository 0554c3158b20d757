//! Assistant service: pairs the fixed prompts with user content.

use ecobot_types::error::LlmError;
use ecobot_types::llm::UserContent;

use crate::llm::LlmProvider;
use crate::prompts::{CHAT_SYSTEM_PROMPT, CLASSIFY_PROMPT};

/// Service producing chat replies and waste-classification labels.
///
/// Stateless across calls: each invocation is one gateway request with no
/// server-side conversation history.
pub struct AssistantService<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> AssistantService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Answer a single eco-guidance chat message.
    pub async fn converse(&self, message: &str) -> Result<String, LlmError> {
        self.provider
            .generate(CHAT_SYSTEM_PROMPT, &UserContent::text(message))
            .await
    }

    /// Classify an uploaded waste item image into its disposal category.
    pub async fn classify(&self, data: Vec<u8>, mime_type: &str) -> Result<String, LlmError> {
        self.provider
            .generate(CLASSIFY_PROMPT, &UserContent::image(data, mime_type))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the prompt it was called with and echoes a canned reply.
    struct RecordingProvider {
        seen_prompt: Mutex<Option<String>>,
        reply: &'static str,
    }

    impl RecordingProvider {
        fn new(reply: &'static str) -> Self {
            Self {
                seen_prompt: Mutex::new(None),
                reply,
            }
        }
    }

    impl LlmProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(
            &self,
            system_prompt: &str,
            _content: &UserContent,
        ) -> Result<String, LlmError> {
            *self.seen_prompt.lock().unwrap() = Some(system_prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    #[tokio::test]
    async fn test_converse_uses_chat_prompt() {
        let svc = AssistantService::new(RecordingProvider::new("hi there"));
        let reply = svc.converse("how do I compost?").await.unwrap();
        assert_eq!(reply, "hi there");
        let prompt = svc.provider.seen_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, CHAT_SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn test_classify_uses_classification_prompt() {
        let svc = AssistantService::new(RecordingProvider::new("Recyclable"));
        let reply = svc.classify(vec![0xff, 0xd8], "image/jpeg").await.unwrap();
        assert_eq!(reply, "Recyclable");
        let prompt = svc.provider.seen_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, CLASSIFY_PROMPT);
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        struct Failing;
        impl LlmProvider for Failing {
            fn name(&self) -> &str {
                "failing"
            }
            async fn generate(
                &self,
                _system_prompt: &str,
                _content: &UserContent,
            ) -> Result<String, LlmError> {
                Err(LlmError::Http("connection refused".to_string()))
            }
        }

        let svc = AssistantService::new(Failing);
        assert!(matches!(
            svc.converse("hello").await,
            Err(LlmError::Http(_))
        ));
    }
}
