use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{DomainError, SchemaDescriptor, StructuredPrompt};

/// Send a structured prompt and parse the reply into `T`.
pub(crate) async fn complete_structured<T: DeserializeOwned>(
    client: &dyn CompletionClient,
    request: &StructuredPrompt,
) -> Result<T, DomainError> {
    let text = client
        .request_structured_completion(&request.prompt, &request.schema)
        .await?;
    debug!("{} raw response: {}", client.model_name(), text);
    parse_structured(&text, &request.schema)
}

/// Parse completion text as JSON, check it against `schema`, then decode it
/// into `T`.
///
/// A surrounding Markdown code fence is ignored. Every failure is reported as
/// [`DomainError::SchemaParseFailure`].
pub fn parse_structured<T: DeserializeOwned>(
    text: &str,
    schema: &SchemaDescriptor,
) -> Result<T, DomainError> {
    let body = strip_code_fence(text);

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| DomainError::schema_parse(format!("response is not valid JSON: {e}")))?;

    schema.validate(&value)?;

    serde_json::from_value(value)
        .map_err(|e| DomainError::schema_parse(format!("response does not match schema: {e}")))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.find('\n').map(|i| &rest[i + 1..]).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_schema() -> SchemaDescriptor {
        SchemaDescriptor::array_of(SchemaDescriptor::enumeration(&["a", "b"]))
    }

    #[test]
    fn test_parses_plain_json() {
        let parsed: Vec<String> = parse_structured(r#"["a", "b", "a"]"#, &tags_schema()).unwrap();
        assert_eq!(parsed, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_tolerates_code_fence() {
        let text = "```json\n[\"b\"]\n```";
        let parsed: Vec<String> = parse_structured(text, &tags_schema()).unwrap();
        assert_eq!(parsed, vec!["b"]);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_structured::<Vec<String>>("[\"a\",", &tags_schema()).unwrap_err();
        assert!(err.is_schema_parse_failure());
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = parse_structured::<Vec<String>>("   ", &tags_schema()).unwrap_err();
        assert!(err.is_schema_parse_failure());
    }

    #[test]
    fn test_rejects_schema_violation() {
        let err = parse_structured::<Vec<String>>(r#"["c"]"#, &tags_schema()).unwrap_err();
        assert!(err.is_schema_parse_failure());
    }
}
