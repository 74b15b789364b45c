use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, credentials, and
/// vendor-specific API details. The generation use cases only ever see raw
/// text or a [`DomainError`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a `system` context message followed by a `user` prompt and return
    /// the first choice's text, exactly as the model produced it.
    ///
    /// One call makes at most one outbound request and never retries.
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError>;
}
