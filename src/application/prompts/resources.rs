use crate::domain::{SchemaDescriptor, StructuredPrompt};

/// Schema for resource search: an array of resource cards.
pub fn resource_list_schema() -> SchemaDescriptor {
    SchemaDescriptor::array_of(
        SchemaDescriptor::object()
            .with_property("topic", SchemaDescriptor::string())
            .with_property("summary", SchemaDescriptor::string())
            .with_property("keyAdvice", SchemaDescriptor::array_of(SchemaDescriptor::string()))
            .with_property("relatedTags", SchemaDescriptor::array_of(SchemaDescriptor::string())),
    )
}

pub fn build_resource_search_prompt(query: &str) -> StructuredPrompt {
    let prompt = format!(
        "You are a helpful health librarian. Provide exactly 3 distinct resource cards \
         for the health topic: \"{query}\".\n\
         Each resource should explain a different aspect (e.g., Diet, Exercise, Treatment, \
         or General Overview).\n\
         Keep language simple (Grade 8 reading level).\n\
         Return JSON.",
        query = query,
    );

    StructuredPrompt::new(prompt, resource_list_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_query() {
        let request = build_resource_search_prompt("Heart Health");
        assert!(request.prompt.contains("\"Heart Health\""));
        assert!(request.prompt.contains("exactly 3"));
        assert!(request.prompt.contains("Grade 8"));
    }

    #[test]
    fn test_schema_shape() {
        let schema = resource_list_schema();
        assert!(schema.is_array());
        let item = schema.items().unwrap();
        for field in ["topic", "summary", "keyAdvice", "relatedTags"] {
            assert!(item.property(field).is_some(), "missing {}", field);
        }
        assert!(item.property("keyAdvice").unwrap().is_array());
    }
}
