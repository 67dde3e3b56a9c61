use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Provider failure: {0}")]
    ProviderFailure(String),

    #[error("Schema parse failure: {0}")]
    SchemaParseFailure(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::ProviderFailure(msg.into())
    }

    pub fn schema_parse(msg: impl Into<String>) -> Self {
        Self::SchemaParseFailure(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::ProviderFailure(_))
    }

    pub fn is_schema_parse_failure(&self) -> bool {
        matches!(self, Self::SchemaParseFailure(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
