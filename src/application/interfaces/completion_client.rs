use async_trait::async_trait;

use crate::domain::{DomainError, SchemaDescriptor};

/// Submits a prompt together with a response schema to a generative-text
/// provider and returns the raw JSON text it produced.
///
/// Implementors own transport, authentication and the vendor envelope. Each
/// call performs exactly one outbound request: no retry, no caching. Every
/// failure (transport, auth/quota, empty body) surfaces as
/// [`DomainError::ProviderFailure`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn request_structured_completion(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<String, DomainError>;

    /// Model identifier requests are addressed to (for logging).
    fn model_name(&self) -> &str;
}
