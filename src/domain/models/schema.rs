use serde_json::{json, Map, Value};

use crate::domain::DomainError;

/// Declarative description of the JSON shape a completion must conform to.
///
/// Sent to the provider alongside the prompt (see [`SchemaDescriptor::to_json`])
/// and checked again locally once the response text has been parsed
/// (see [`SchemaDescriptor::validate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaDescriptor {
    String {
        /// Closed set of accepted literals, if the field is an enumeration.
        enum_values: Option<Vec<String>>,
    },
    Array {
        items: Box<SchemaDescriptor>,
    },
    Object {
        /// Properties in declaration order.
        properties: Vec<(String, SchemaDescriptor)>,
        required: Vec<String>,
    },
}

impl SchemaDescriptor {
    pub fn string() -> Self {
        Self::String { enum_values: None }
    }

    pub fn enumeration<S: AsRef<str>>(values: &[S]) -> Self {
        Self::String {
            enum_values: Some(values.iter().map(|v| v.as_ref().to_string()).collect()),
        }
    }

    pub fn array_of(items: SchemaDescriptor) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    pub fn object() -> Self {
        Self::Object {
            properties: Vec::new(),
            required: Vec::new(),
        }
    }

    /// Add a required property. Has no effect on non-object descriptors.
    pub fn with_property(mut self, name: impl Into<String>, schema: SchemaDescriptor) -> Self {
        if let Self::Object {
            properties,
            required,
        } = &mut self
        {
            let name = name.into();
            required.push(name.clone());
            properties.push((name, schema));
        }
        self
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String { .. } => "STRING",
            Self::Array { .. } => "ARRAY",
            Self::Object { .. } => "OBJECT",
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    pub fn property(&self, name: &str) -> Option<&SchemaDescriptor> {
        match self {
            Self::Object { properties, .. } => properties
                .iter()
                .find(|(prop, _)| prop == name)
                .map(|(_, schema)| schema),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&SchemaDescriptor> {
        match self {
            Self::Array { items } => Some(items),
            _ => None,
        }
    }

    pub fn enum_values(&self) -> Option<&[String]> {
        match self {
            Self::String {
                enum_values: Some(values),
            } => Some(values),
            _ => None,
        }
    }

    /// Render in the provider's OpenAPI-subset schema format.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String { enum_values } => {
                let mut schema = json!({ "type": self.type_name() });
                if let Some(values) = enum_values {
                    schema["enum"] = json!(values);
                }
                schema
            }
            Self::Array { items } => json!({
                "type": self.type_name(),
                "items": items.to_json(),
            }),
            Self::Object {
                properties,
                required,
            } => {
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_json()))
                    .collect();
                json!({
                    "type": self.type_name(),
                    "properties": props,
                    "required": required,
                })
            }
        }
    }

    /// Check a parsed value against this descriptor.
    ///
    /// Unknown object keys are tolerated; missing required keys, wrong types and
    /// literals outside an enumeration are not.
    pub fn validate(&self, value: &Value) -> Result<(), DomainError> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), DomainError> {
        match self {
            Self::String { enum_values } => {
                let text = value.as_str().ok_or_else(|| mismatch(path, self, value))?;
                if let Some(values) = enum_values {
                    if !values.iter().any(|v| v == text) {
                        return Err(DomainError::schema_parse(format!(
                            "{}: '{}' is not one of [{}]",
                            path,
                            text,
                            values.join(", ")
                        )));
                    }
                }
                Ok(())
            }
            Self::Array { items } => {
                let elements = value.as_array().ok_or_else(|| mismatch(path, self, value))?;
                for (i, element) in elements.iter().enumerate() {
                    items.validate_at(element, &format!("{}[{}]", path, i))?;
                }
                Ok(())
            }
            Self::Object {
                properties,
                required,
            } => {
                let object = value.as_object().ok_or_else(|| mismatch(path, self, value))?;
                for name in required {
                    if !object.contains_key(name) {
                        return Err(DomainError::schema_parse(format!(
                            "{}: missing required field '{}'",
                            path, name
                        )));
                    }
                }
                for (name, schema) in properties {
                    if let Some(field) = object.get(name) {
                        schema.validate_at(field, &format!("{}.{}", path, name))?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn mismatch(path: &str, expected: &SchemaDescriptor, found: &Value) -> DomainError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    DomainError::schema_parse(format!(
        "{}: expected {}, found {}",
        path,
        expected.type_name().to_lowercase(),
        found
    ))
}

/// A natural-language instruction paired with the shape its answer must take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredPrompt {
    pub prompt: String,
    pub schema: SchemaDescriptor,
}

impl StructuredPrompt {
    pub fn new(prompt: impl Into<String>, schema: SchemaDescriptor) -> Self {
        Self {
            prompt: prompt.into(),
            schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_schema() -> SchemaDescriptor {
        SchemaDescriptor::array_of(
            SchemaDescriptor::object()
                .with_property("title", SchemaDescriptor::string())
                .with_property("level", SchemaDescriptor::enumeration(&["Low", "High"]))
                .with_property("tags", SchemaDescriptor::array_of(SchemaDescriptor::string())),
        )
    }

    #[test]
    fn test_to_json_renders_provider_format() {
        let rendered = card_schema().to_json();
        assert_eq!(rendered["type"], "ARRAY");
        assert_eq!(rendered["items"]["type"], "OBJECT");
        assert_eq!(rendered["items"]["properties"]["level"]["enum"], json!(["Low", "High"]));
        assert_eq!(rendered["items"]["properties"]["tags"]["items"]["type"], "STRING");
        assert_eq!(rendered["items"]["required"], json!(["title", "level", "tags"]));
        assert!(rendered["items"]["properties"]["title"].get("enum").is_none());
    }

    #[test]
    fn test_validate_accepts_conforming_value() {
        let value = json!([
            {"title": "a", "level": "Low", "tags": []},
            {"title": "b", "level": "High", "tags": ["x"], "extra": 1}
        ]);
        assert!(card_schema().validate(&value).is_ok());
    }

    #[test]
    fn test_validate_rejects_literal_outside_enum() {
        let value = json!([{"title": "a", "level": "Medium", "tags": []}]);
        let err = card_schema().validate(&value).unwrap_err();
        assert!(err.is_schema_parse_failure());
        assert!(err.to_string().contains("$[0].level"));
    }

    #[test]
    fn test_validate_rejects_missing_field() {
        let value = json!([{"title": "a", "level": "Low"}]);
        let err = card_schema().validate(&value).unwrap_err();
        assert!(err.to_string().contains("missing required field 'tags'"));
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let err = card_schema().validate(&json!({"title": "a"})).unwrap_err();
        assert!(err.to_string().contains("expected array, found object"));

        let value = json!([{"title": 3, "level": "Low", "tags": []}]);
        assert!(card_schema().validate(&value).is_err());
    }

    #[test]
    fn test_accessors() {
        let schema = card_schema();
        assert!(schema.is_array());
        let level = schema.items().and_then(|item| item.property("level")).unwrap();
        assert_eq!(level.enum_values().unwrap(), ["Low".to_string(), "High".to_string()]);
        assert!(schema.property("level").is_none());
    }
}
