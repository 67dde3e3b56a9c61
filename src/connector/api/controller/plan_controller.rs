use anyhow::Result;

use crate::{Screening, UserProfile};

use super::super::Container;

pub struct PlanController<'a> {
    container: &'a Container,
}

impl<'a> PlanController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn plan(&self) -> Result<String> {
        let profile = self.container.profile_use_case().load().await;
        let screenings = self
            .container
            .preventive_plan_use_case()
            .execute(&profile)
            .await;

        Ok(self.format_plan(&profile, &screenings))
    }

    fn format_plan(&self, profile: &UserProfile, screenings: &[Screening]) -> String {
        if screenings.is_empty() {
            return "No screening recommendations available. Try again later.".to_string();
        }

        let mut output = format!(
            "Preventive plan for a {} year old {} (conditions: {})\n\n",
            profile.age,
            profile.gender,
            profile.conditions_summary()
        );

        for (i, screening) in screenings.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} [{}]\n   Frequency: {}\n   Why: {}\n\n",
                i + 1,
                screening.name,
                screening.category,
                screening.frequency,
                screening.reason
            ));
        }

        output.trim_end().to_string()
    }
}
