//! Error types for sqlbob

use thiserror::Error;

/// Result type alias for sqlbob operations
pub type BobResult<T> = Result<T, BobError>;

/// Errors surfaced while compiling a statement or loading configuration.
///
/// Validation messages are rendered verbatim so callers can match on the
/// exact text (e.g. `"drop statement must specify a table"`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BobError {
    /// A required builder field is missing or inconsistent
    #[error("{0}")]
    Validation(String),

    /// The upsert dialect code is not one of the known dialects
    #[error("provided database dialect is not supported")]
    UnsupportedDialect,

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl BobError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an unsupported dialect error
    pub fn is_unsupported_dialect(&self) -> bool {
        matches!(self, Self::UnsupportedDialect)
    }
}

impl From<toml::de::Error> for BobError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
