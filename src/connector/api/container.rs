use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::{CompletionClient, ProfileRepository};
use crate::{
    GeminiClient, InMemoryProfileRepository, JsonFileProfileRepository, ManageProfileUseCase,
    PreventivePlanUseCase, ResourceSearchUseCase, SymptomTriageUseCase,
};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Overrides `GEMINI_MODEL` when set.
    pub model: Option<String>,
    /// Keep the profile in memory instead of `<data_dir>/vitalguide_profile.json`.
    pub memory_storage: bool,
}

/// Owns the completion client and profile storage and hands out use cases.
pub struct Container {
    completion_client: Arc<dyn CompletionClient>,
    profile_repo: Arc<dyn ProfileRepository>,
    profile_edit_lock: Arc<Mutex<()>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let client = GeminiClient::from_env_with_model(config.model.as_deref());

        if !client.has_api_key() {
            warn!("GEMINI_API_KEY is not set; guidance requests will return empty results");
        }
        debug!("Using completion endpoint {}", client.endpoint());

        let profile_repo: Arc<dyn ProfileRepository> = if config.memory_storage {
            debug!("Using in-memory profile storage");
            Arc::new(InMemoryProfileRepository::new())
        } else {
            std::fs::create_dir_all(&config.data_dir)?;
            let repo = JsonFileProfileRepository::new(&config.data_dir);
            debug!("Using profile file {}", repo.path().display());
            Arc::new(repo)
        };

        Ok(Self::with_services(config, Arc::new(client), profile_repo))
    }

    /// Wire explicit services, bypassing environment configuration.
    pub fn with_services(
        config: ContainerConfig,
        completion_client: Arc<dyn CompletionClient>,
        profile_repo: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            completion_client,
            profile_repo,
            profile_edit_lock: Arc::new(Mutex::new(())),
            config,
        }
    }

    pub fn profile_use_case(&self) -> ManageProfileUseCase {
        ManageProfileUseCase::with_edit_lock(
            self.profile_repo.clone(),
            self.profile_edit_lock.clone(),
        )
    }

    pub fn preventive_plan_use_case(&self) -> PreventivePlanUseCase {
        PreventivePlanUseCase::new(self.completion_client.clone())
    }

    pub fn triage_use_case(&self) -> SymptomTriageUseCase {
        SymptomTriageUseCase::new(self.completion_client.clone())
    }

    pub fn resource_search_use_case(&self) -> ResourceSearchUseCase {
        ResourceSearchUseCase::new(self.completion_client.clone())
    }

    pub fn model_name(&self) -> &str {
        self.completion_client.model_name()
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
