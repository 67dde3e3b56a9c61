use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::application::ProfileRepository;
use crate::domain::{DomainError, Gender, UserProfile};

/// Field-level edits applied by [`ManageProfileUseCase::update`].
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
}

/// Loads, edits and persists the user profile.
///
/// Every edit is a load-modify-save cycle held under `edit_lock`, so
/// concurrent edits through use cases sharing the lock never drop each
/// other's changes. Whole-profile `save` calls stay last-write-wins.
pub struct ManageProfileUseCase {
    repository: Arc<dyn ProfileRepository>,
    edit_lock: Arc<Mutex<()>>,
}

impl ManageProfileUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self::with_edit_lock(repository, Arc::new(Mutex::new(())))
    }

    /// Share `edit_lock` with every other use case editing the same repository.
    pub fn with_edit_lock(
        repository: Arc<dyn ProfileRepository>,
        edit_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            repository,
            edit_lock,
        }
    }

    /// The stored profile, or the default one when nothing usable is stored.
    pub async fn load(&self) -> UserProfile {
        match self.repository.load().await {
            Ok(Some(profile)) => profile,
            Ok(None) => UserProfile::default(),
            Err(e) => {
                warn!("Failed to load saved profile: {}. Using default profile.", e);
                UserProfile::default()
            }
        }
    }

    pub async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.repository.save(profile).await?;
        info!("Profile saved for {}", profile.name);
        Ok(())
    }

    pub async fn update(&self, update: ProfileUpdate) -> Result<UserProfile, DomainError> {
        let _guard = self.edit_lock.lock().await;
        let mut profile = self.load().await;

        if let Some(name) = update.name {
            profile.name = name.trim().to_string();
        }
        if let Some(age) = update.age {
            profile.age = age;
        }
        if let Some(gender) = update.gender {
            profile.gender = gender;
        }

        self.save(&profile).await?;
        Ok(profile)
    }

    /// Append a trimmed condition. Blank input leaves the profile untouched.
    pub async fn add_condition(&self, condition: &str) -> Result<UserProfile, DomainError> {
        let _guard = self.edit_lock.lock().await;
        let mut profile = self.load().await;

        let condition = condition.trim();
        if condition.is_empty() {
            return Ok(profile);
        }

        profile.conditions.push(condition.to_string());
        self.save(&profile).await?;
        Ok(profile)
    }

    /// Remove the condition at `index` (zero-based).
    pub async fn remove_condition(&self, index: usize) -> Result<UserProfile, DomainError> {
        let _guard = self.edit_lock.lock().await;
        let mut profile = self.load().await;

        if index >= profile.conditions.len() {
            return Err(DomainError::invalid_input(format!(
                "no condition at index {} (profile has {})",
                index,
                profile.conditions.len()
            )));
        }

        let removed = profile.conditions.remove(index);
        info!("Removing condition: {}", removed);
        self.save(&profile).await?;
        Ok(profile)
    }
}
