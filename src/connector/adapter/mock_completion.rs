use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::CompletionClient;
use crate::domain::{DomainError, SchemaDescriptor};

/// A [`CompletionClient`] that answers every request with a fixed outcome and
/// records the prompt and schema of each request.
pub struct MockCompletionClient {
    outcome: Result<String, String>,
    requests: Mutex<Vec<(String, SchemaDescriptor)>>,
}

impl MockCompletionClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(prompt, schema)` pairs in the order they were sent.
    pub fn received_requests(&self) -> Vec<(String, SchemaDescriptor)> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.received_requests()
            .into_iter()
            .map(|(prompt, _)| prompt)
            .collect()
    }

    pub fn received_schemas(&self) -> Vec<SchemaDescriptor> {
        self.received_requests()
            .into_iter()
            .map(|(_, schema)| schema)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.received_requests().len()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn request_structured_completion(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<String, DomainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((prompt.to_string(), schema.clone()));
        }

        self.outcome.clone().map_err(DomainError::provider)
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}
