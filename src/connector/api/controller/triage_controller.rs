use anyhow::Result;

use crate::{TriageResult, EMERGENCY_NOTICE};

use super::super::Container;

pub struct TriageController<'a> {
    container: &'a Container,
}

impl<'a> TriageController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn triage(&self, symptoms: String) -> Result<String> {
        let profile = self.container.profile_use_case().load().await;
        let result = self
            .container
            .triage_use_case()
            .execute(&symptoms, &profile)
            .await;

        Ok(format_triage(result.as_ref()))
    }
}

fn format_triage(result: Option<&TriageResult>) -> String {
    let Some(result) = result else {
        return format!("No assessment available.\n\n{}", EMERGENCY_NOTICE);
    };

    let mut output = format!(
        "Urgency: {} ({})\n\n{}\n\nRecommended steps:\n",
        result.urgency_level,
        result.urgency_level.description(),
        result.summary
    );
    for (i, step) in result.actionable_steps.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    if let Some(action) = result.urgency_level.call_to_action() {
        output.push_str(&format!("\nNext: {}\n", action));
    }
    output.push_str(&format!("\n{}\n\n{}", result.disclaimer, EMERGENCY_NOTICE));
    output
}
