//! Defaults applied by the [`Bob`](crate::Bob) root builder.

use serde::Deserialize;

use crate::error::BobResult;
use crate::placeholder::QUESTION;

/// Configuration for [`Bob`](crate::Bob).
///
/// Builders created through a configured `Bob` start from these defaults;
/// each builder can still override them.
///
/// # Example
/// ```
/// use sqlbob::{Bob, BobConfig, SqlStatement, DOLLAR};
///
/// let bob = Bob::with_config(BobConfig::new().placeholder_format(DOLLAR));
/// let sql = bob.has_table("users").to_sql().unwrap();
/// assert!(sql.contains("table_name = $1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BobConfig {
    /// Placeholder token for Upsert and Has builders (`?`, `$`, `:`, `@p`).
    pub placeholder_format: String,
    /// Schema qualifier for CreateTable and Has builders.
    pub schema: Option<String>,
}

impl Default for BobConfig {
    fn default() -> Self {
        Self {
            placeholder_format: QUESTION.to_string(),
            schema: None,
        }
    }
}

impl BobConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    ///
    /// ```toml
    /// placeholder_format = "$"
    /// schema = "private"
    /// ```
    pub fn from_toml_str(raw: &str) -> BobResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Set the default placeholder token.
    pub fn placeholder_format(mut self, format: impl Into<String>) -> Self {
        self.placeholder_format = format.into();
        self
    }

    /// Set the default schema.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Clear the default schema.
    pub fn no_schema(mut self) -> Self {
        self.schema = None;
        self
    }
}
