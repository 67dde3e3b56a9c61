use async_trait::async_trait;

use crate::domain::{DomainError, UserProfile};

/// Persistence for the single stored user profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<UserProfile>, DomainError>;

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError>;
}
