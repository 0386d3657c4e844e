//! CREATE INDEX builder.
//!
//! Index, table and column names are emitted as given (unquoted), so
//! callers may pass expressions or already-quoted names.

use crate::error::{BobError, BobResult};
use crate::statement::traits::{CompiledSql, SqlStatement};

/// One indexed column with optional collation and modifiers (`ASC`, `DESC`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexColumn {
    pub name: String,
    pub collate: Option<String>,
    pub extras: Vec<String>,
}

impl IndexColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set `COLLATE <collation>`.
    pub fn collate(mut self, collation: impl Into<String>) -> Self {
        self.collate = Some(collation.into());
        self
    }

    /// Append a modifier.
    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    fn to_sql(&self) -> String {
        let mut out = self.name.clone();
        if let Some(collate) = self.collate.as_deref().filter(|c| !c.is_empty()) {
            out.push_str(" COLLATE ");
            out.push_str(collate);
        }
        if !self.extras.is_empty() {
            out.push(' ');
            out.push_str(&self.extras.join(" "));
        }
        out
    }
}

impl From<&str> for IndexColumn {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// CREATE INDEX builder.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct CreateIndexBuilder {
    name: String,
    table: String,
    columns: Vec<IndexColumn>,
    unique: bool,
    fulltext: bool,
    spatial: bool,
    if_not_exists: bool,
}

impl CreateIndexBuilder {
    /// Create a builder for the index `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add `IF NOT EXISTS`.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Set the indexed table.
    pub fn on(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn fulltext(mut self) -> Self {
        self.fulltext = true;
        self
    }

    pub fn spatial(mut self) -> Self {
        self.spatial = true;
        self
    }

    /// Append an indexed column. Call once per column.
    pub fn columns(mut self, column: impl Into<IndexColumn>) -> Self {
        self.columns.push(column.into());
        self
    }
}

impl SqlStatement for CreateIndexBuilder {
    fn kind(&self) -> &'static str {
        "create_index"
    }

    fn validate(&self) -> BobResult<()> {
        if self.name.is_empty() {
            return Err(BobError::validation(
                "index name is required on create index statement",
            ));
        }
        if self.table.is_empty() {
            return Err(BobError::validation(
                "a table name must be specified on create index statement",
            ));
        }
        if self.columns.is_empty() {
            return Err(BobError::validation(
                "should at least specify one column for create index statement",
            ));
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        let mut sql = String::from("CREATE ");

        if self.unique {
            sql.push_str("UNIQUE ");
        }
        if self.fulltext {
            sql.push_str("FULLTEXT ");
        }
        if self.spatial {
            sql.push_str("SPATIAL ");
        }

        sql.push_str("INDEX ");

        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }

        let columns: Vec<String> = self.columns.iter().map(IndexColumn::to_sql).collect();
        sql.push_str(&format!("{} ON {} ({});", self.name, self.table, columns.join(", ")));

        CompiledSql::sql_only(sql)
    }
}
