use std::sync::Arc;

use tracing::{info, warn};

use crate::application::use_cases::structured_completion::complete_structured;
use crate::application::{build_preventive_prompt, CompletionClient};
use crate::domain::{DomainError, Screening, UserProfile};

/// Recommends preventive screenings for a profile.
pub struct PreventivePlanUseCase {
    client: Arc<dyn CompletionClient>,
}

impl PreventivePlanUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Never fails: provider and parse failures yield an empty plan.
    pub async fn execute(&self, profile: &UserProfile) -> Vec<Screening> {
        match self.try_execute(profile).await {
            Ok(screenings) => screenings,
            Err(e) => {
                warn!("Preventive plan unavailable: {}. Returning no screenings.", e);
                Vec::new()
            }
        }
    }

    pub async fn try_execute(&self, profile: &UserProfile) -> Result<Vec<Screening>, DomainError> {
        info!(
            "Requesting preventive plan (age={}, gender={}, conditions={})",
            profile.age,
            profile.gender,
            profile.conditions.len()
        );

        let request = build_preventive_prompt(profile);
        let screenings: Vec<Screening> = complete_structured(self.client.as_ref(), &request).await?;

        info!("Received {} screenings", screenings.len());
        Ok(screenings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::screening_list_schema;
    use crate::connector::MockCompletionClient;
    use crate::domain::{Gender, ScreeningCategory};

    const PLAN: &str = r#"[
        {"name":"Mammogram","frequency":"Every 2 years","reason":"Breast cancer","category":"Critical"},
        {"name":"Flu shot","frequency":"Yearly","reason":"Influenza","category":"Routine"}
    ]"#;

    #[tokio::test]
    async fn test_returns_parsed_screenings() {
        let client = Arc::new(MockCompletionClient::responding(PLAN));
        let use_case = PreventivePlanUseCase::new(client.clone());

        let profile = UserProfile::new("Jane", 45, Gender::Female);
        let plan = use_case.execute(&profile).await;

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].name, "Mammogram");
        assert_eq!(plan[1].category, ScreeningCategory::Routine);

        let prompts = client.received_prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Female"));
        assert_eq!(client.received_schemas(), vec![screening_list_schema()]);
    }

    #[tokio::test]
    async fn test_provider_failure_yields_empty_plan() {
        let use_case =
            PreventivePlanUseCase::new(Arc::new(MockCompletionClient::failing("quota exceeded")));
        assert!(use_case.execute(&UserProfile::default()).await.is_empty());

        let err = use_case.try_execute(&UserProfile::default()).await.unwrap_err();
        assert!(err.is_provider_failure());
    }

    #[tokio::test]
    async fn test_invalid_category_yields_empty_plan() {
        let text = r#"[{"name":"x","frequency":"y","reason":"z","category":"Mandatory"}]"#;
        let use_case = PreventivePlanUseCase::new(Arc::new(MockCompletionClient::responding(text)));
        assert!(use_case.execute(&UserProfile::default()).await.is_empty());

        let err = use_case.try_execute(&UserProfile::default()).await.unwrap_err();
        assert!(err.is_schema_parse_failure());
    }

    #[tokio::test]
    async fn test_missing_field_yields_empty_plan() {
        let text = r#"[{"name":"x","frequency":"y","category":"Routine"}]"#;
        let use_case = PreventivePlanUseCase::new(Arc::new(MockCompletionClient::responding(text)));
        assert!(use_case.execute(&UserProfile::default()).await.is_empty());
    }
}
