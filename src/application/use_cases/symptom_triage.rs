use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::use_cases::structured_completion::complete_structured;
use crate::application::{build_triage_prompt, CompletionClient};
use crate::domain::{DomainError, TriageResult, UserProfile};

/// Classifies a symptom description into an urgency level with next steps.
pub struct SymptomTriageUseCase {
    client: Arc<dyn CompletionClient>,
}

impl SymptomTriageUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Never fails: blank input, provider and parse failures all yield `None`.
    pub async fn execute(&self, symptoms: &str, profile: &UserProfile) -> Option<TriageResult> {
        match self.try_execute(symptoms, profile).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Symptom triage unavailable: {}. Returning no result.", e);
                None
            }
        }
    }

    /// `Ok(None)` only for blank symptom text, which is never sent to the provider.
    pub async fn try_execute(
        &self,
        symptoms: &str,
        profile: &UserProfile,
    ) -> Result<Option<TriageResult>, DomainError> {
        if symptoms.trim().is_empty() {
            debug!("Skipping triage for blank symptom description");
            return Ok(None);
        }

        info!("Requesting symptom triage ({} chars)", symptoms.len());

        let request = build_triage_prompt(symptoms, profile);
        let result: TriageResult = complete_structured(self.client.as_ref(), &request).await?;

        info!("Triage classified as {}", result.urgency_level);
        Ok(Some(result))
    }
}
