use anyhow::Result;

use crate::{Commands, ProfileCommand};

use super::container::Container;
use super::controller::{PlanController, ProfileController, ResourcesController, TriageController};

pub struct Router<'a> {
    profile_controller: ProfileController<'a>,
    plan_controller: PlanController<'a>,
    triage_controller: TriageController<'a>,
    resources_controller: ResourcesController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            profile_controller: ProfileController::new(container),
            plan_controller: PlanController::new(container),
            triage_controller: TriageController::new(container),
            resources_controller: ResourcesController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Profile { action } => match action {
                ProfileCommand::Show => self.profile_controller.show().await,
                ProfileCommand::Set { name, age, gender } => {
                    self.profile_controller.set(name, age, gender).await
                }
                ProfileCommand::AddCondition { condition } => {
                    self.profile_controller.add_condition(condition).await
                }
                ProfileCommand::RemoveCondition { number } => {
                    self.profile_controller.remove_condition(number).await
                }
            },
            Commands::Plan => self.plan_controller.plan().await,
            Commands::Triage { symptoms } => self.triage_controller.triage(symptoms).await,
            Commands::Resources { query, topics } => match query {
                Some(query) if !topics => self.resources_controller.search(query).await,
                _ => Ok(self.resources_controller.topics()),
            },
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
