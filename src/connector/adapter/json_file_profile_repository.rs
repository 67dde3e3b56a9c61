use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::ProfileRepository;
use crate::domain::{DomainError, UserProfile};

/// Storage key of the persisted profile; the file is `<key>.json`.
pub const PROFILE_STORAGE_KEY: &str = "vitalguide_profile";

/// Stores the profile as pretty-printed JSON under the data directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a crash mid-write never leaves a truncated profile behind.
pub struct JsonFileProfileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileProfileRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_path(data_dir.as_ref().join(format!("{PROFILE_STORAGE_KEY}.json")))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileRepository for JsonFileProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved profile at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            DomainError::storage(format!(
                "corrupt profile at {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| DomainError::storage(format!("failed to serialize profile: {e}")))?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Saved profile to {}", self.path.display());
        Ok(())
    }
}
