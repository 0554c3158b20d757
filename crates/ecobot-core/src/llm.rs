//! LlmProvider trait definition.
//!
//! The gateway abstraction over the external generative model. Exactly one
//! upstream call per invocation: no retries, no streaming, no conversation
//! history held on the server. Multi-turn context, if ever wanted, belongs
//! in the route layer as an explicit value, not in the gateway.

use std::sync::Arc;

use ecobot_types::error::LlmError;
use ecobot_types::llm::UserContent;

/// Trait for generative model backends.
///
/// Implementations live in ecobot-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one system prompt plus one piece of user content, returning the
    /// model's trimmed text reply.
    fn generate(
        &self,
        system_prompt: &str,
        content: &UserContent,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}

impl<P: LlmProvider> LlmProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(
        &self,
        system_prompt: &str,
        content: &UserContent,
    ) -> Result<String, LlmError> {
        (**self).generate(system_prompt, content).await
    }
}

/// Object-safe version of [`LlmProvider`] with a boxed future.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation covers
/// every `LlmProvider`.
pub trait LlmProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        system_prompt: &'a str,
        content: &'a UserContent,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<String, LlmError>> + Send + 'a>,
    >;
}

impl<T: LlmProvider> LlmProviderDyn for T {
    fn name(&self) -> &str {
        LlmProvider::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        system_prompt: &'a str,
        content: &'a UserContent,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<String, LlmError>> + Send + 'a>,
    > {
        Box::pin(self.generate(system_prompt, content))
    }
}

/// Type-erased gateway for runtime provider selection (and test stubs).
///
/// `LlmProvider` uses RPITIT, so it cannot be a trait object directly;
/// `BoxLlmProvider` delegates through the object-safe [`LlmProviderDyn`].
pub struct BoxLlmProvider {
    inner: Box<dyn LlmProviderDyn>,
}

impl BoxLlmProvider {
    /// Wrap a concrete provider in a type-erased box.
    pub fn new<T: LlmProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }
}

impl LlmProvider for BoxLlmProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(
        &self,
        system_prompt: &str,
        content: &UserContent,
    ) -> Result<String, LlmError> {
        self.inner.generate_boxed(system_prompt, content).await
    }
}
