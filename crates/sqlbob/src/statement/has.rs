//! Table / column existence checks against `information_schema`.

use crate::arg::collect_args;
use crate::error::{BobError, BobResult};
use crate::placeholder::{QUESTION, replace_placeholders};
use crate::statement::traits::{CompiledSql, SqlStatement};

/// HAS-TABLE / HAS-COLUMN builder.
///
/// `has_table` and `has_column` may be called in either order. Without a
/// schema, the lookup is scoped to `current_schema()`.
#[derive(Debug, Clone)]
#[must_use]
pub struct HasBuilder {
    table: String,
    column: String,
    schema: String,
    placeholder: String,
}

impl Default for HasBuilder {
    fn default() -> Self {
        Self {
            table: String::new(),
            column: String::new(),
            schema: String::new(),
            placeholder: QUESTION.to_string(),
        }
    }
}

impl HasBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table to look for.
    pub fn has_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the column to look for within the table.
    pub fn has_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Look in `schema` instead of the current schema.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Change the placeholder token (`?` by default).
    pub fn placeholder_format(mut self, format: impl Into<String>) -> Self {
        self.placeholder = format.into();
        self
    }
}

impl SqlStatement for HasBuilder {
    fn kind(&self) -> &'static str {
        "has"
    }

    fn validate(&self) -> BobResult<()> {
        if self.table.is_empty() {
            return Err(BobError::validation("has statement should have a table name"));
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        let mut sql = String::from("SELECT * FROM information_schema.");

        if self.column.is_empty() {
            sql.push_str("tables");
        } else {
            sql.push_str("columns");
        }

        sql.push_str(" WHERE table_name = ?");

        if !self.column.is_empty() {
            sql.push_str(" AND column_name = ?");
        }

        if self.schema.is_empty() {
            sql.push_str(" AND table_schema = current_schema();");
        } else {
            sql.push_str(" AND table_schema = ?;");
        }

        // Empty column / schema are dropped, matching the fragments left out above.
        let args = collect_args([
            self.table.as_str(),
            self.column.as_str(),
            self.schema.as_str(),
        ]);

        CompiledSql::new(replace_placeholders(&sql, &self.placeholder), args)
    }
}
