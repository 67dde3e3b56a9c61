use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::use_cases::structured_completion::complete_structured;
use crate::application::{build_resource_search_prompt, CompletionClient};
use crate::domain::{DomainError, HealthResource};

/// Produces plain-language resource cards for a health topic.
pub struct ResourceSearchUseCase {
    client: Arc<dyn CompletionClient>,
}

impl ResourceSearchUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Never fails: blank queries, provider and parse failures yield no cards.
    pub async fn execute(&self, query: &str) -> Vec<HealthResource> {
        match self.try_execute(query).await {
            Ok(resources) => resources,
            Err(e) => {
                warn!("Resource search for '{}' unavailable: {}. Returning no resources.", query, e);
                Vec::new()
            }
        }
    }

    pub async fn try_execute(&self, query: &str) -> Result<Vec<HealthResource>, DomainError> {
        if query.trim().is_empty() {
            debug!("Skipping resource search for blank query");
            return Ok(Vec::new());
        }

        info!("Searching health resources for: {}", query);

        let request = build_resource_search_prompt(query);
        let resources: Vec<HealthResource> =
            complete_structured(self.client.as_ref(), &request).await?;

        info!("Received {} resources", resources.len());
        Ok(resources)
    }
}
