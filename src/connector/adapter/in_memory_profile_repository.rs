use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, UserProfile};

/// Keeps the profile in process memory; nothing survives a restart.
pub struct InMemoryProfileRepository {
    profile: RwLock<Option<UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profile: RwLock::new(None),
        }
    }

    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
        }
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }
}
