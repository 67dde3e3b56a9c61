use anyhow::Result;

use crate::{HealthResource, PRESET_TOPICS};

use super::super::Container;

pub struct ResourcesController<'a> {
    container: &'a Container,
}

impl<'a> ResourcesController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn search(&self, query: String) -> Result<String> {
        let resources = self
            .container
            .resource_search_use_case()
            .execute(&query)
            .await;

        Ok(self.format_resources(&query, &resources))
    }

    pub fn topics(&self) -> String {
        let mut output = String::from("Popular topics:\n");
        for topic in PRESET_TOPICS {
            output.push_str(&format!("  - {}\n", topic));
        }
        output.trim_end().to_string()
    }

    fn format_resources(&self, query: &str, resources: &[HealthResource]) -> String {
        if resources.is_empty() {
            return format!("No resources found for \"{}\".", query);
        }

        let mut output = format!("Resources for \"{}\":\n\n", query);

        for resource in resources {
            output.push_str(&format!("## {}\n{}\n", resource.topic, resource.summary));
            for advice in &resource.key_advice {
                output.push_str(&format!("  * {}\n", advice));
            }
            if !resource.related_tags.is_empty() {
                let tags: Vec<String> =
                    resource.related_tags.iter().map(|t| format!("#{}", t)).collect();
                output.push_str(&format!("  {}\n", tags.join(" ")));
            }
            output.push('\n');
        }

        output.trim_end().to_string()
    }
}
