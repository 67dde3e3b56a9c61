use anyhow::{bail, Result};

use crate::{Gender, ProfileUpdate, UserProfile};

use super::super::Container;

pub struct ProfileController<'a> {
    container: &'a Container,
}

impl<'a> ProfileController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self) -> Result<String> {
        let profile = self.container.profile_use_case().load().await;
        Ok(format_profile(&profile))
    }

    pub async fn set(
        &self,
        name: Option<String>,
        age: Option<u32>,
        gender: Option<Gender>,
    ) -> Result<String> {
        let use_case = self.container.profile_use_case();
        let profile = use_case.update(ProfileUpdate { name, age, gender }).await?;
        Ok(format!("Profile saved successfully!\n\n{}", format_profile(&profile)))
    }

    pub async fn add_condition(&self, condition: String) -> Result<String> {
        let profile = self
            .container
            .profile_use_case()
            .add_condition(&condition)
            .await?;
        Ok(format_profile(&profile))
    }

    /// `number` is the 1-based position shown by `profile show`.
    pub async fn remove_condition(&self, number: usize) -> Result<String> {
        let Some(index) = number.checked_sub(1) else {
            bail!("condition numbers start at 1");
        };
        let profile = self
            .container
            .profile_use_case()
            .remove_condition(index)
            .await?;
        Ok(format_profile(&profile))
    }
}

fn format_profile(profile: &UserProfile) -> String {
    let mut output = format!(
        "Name:   {}\nAge:    {}\nGender: {}\nConditions:",
        profile.name, profile.age, profile.gender
    );

    if profile.conditions.is_empty() {
        output.push_str(" none recorded");
    } else {
        for (i, condition) in profile.conditions.iter().enumerate() {
            output.push_str(&format!("\n  {}. {}", i + 1, condition));
        }
    }

    output
}
