//! CREATE TABLE builder.

use crate::error::{BobError, BobResult};
use crate::ident::{Ident, quote};
use crate::statement::traits::{CompiledSql, SqlStatement};

/// A column definition: name, SQL type and trailing modifiers.
///
/// ```
/// use sqlbob::ColumnDef;
///
/// let col = ColumnDef::new("email", "VARCHAR(255)").extra("NOT NULL").extra("UNIQUE");
/// assert_eq!(col.to_sql(), r#""email" VARCHAR(255) NOT NULL UNIQUE"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: String,
    pub extras: Vec<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            extras: Vec::new(),
        }
    }

    /// Append one modifier (e.g. `NOT NULL`).
    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    /// Append several modifiers.
    pub fn extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }

    /// Render as `"name" TYPE EXTRA...`.
    pub fn to_sql(&self) -> String {
        let mut out = quote(&self.name);
        out.push(' ');
        out.push_str(&self.ty);
        for extra in &self.extras {
            out.push(' ');
            out.push_str(extra);
        }
        out
    }
}

/// CREATE TABLE builder.
///
/// Columns keep call order. Pairs given through [`columns`](Self::columns)
/// and [`types`](Self::types) sit where the first of those two calls was
/// made, among columns from the typed helpers and
/// [`add_column`](Self::add_column).
#[derive(Debug, Clone)]
#[must_use]
pub struct CreateTableBuilder {
    table: String,
    schema: String,
    if_not_exists: bool,
    defs: Vec<ColumnDef>,
    names: Vec<String>,
    types: Vec<String>,
    // Position in `defs` where the paired columns go.
    paired_at: Option<usize>,
    primary: Option<String>,
    unique: Option<String>,
}

impl CreateTableBuilder {
    /// Create a builder for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            schema: String::new(),
            if_not_exists: false,
            defs: Vec::new(),
            names: Vec::new(),
            types: Vec::new(),
            paired_at: None,
            primary: None,
            unique: None,
        }
    }

    /// Rename the table.
    pub fn name(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Qualify the table with a schema: `"schema"."table"`.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Add `IF NOT EXISTS`.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Append a column definition.
    pub fn add_column(mut self, column: ColumnDef) -> Self {
        self.defs.push(column);
        self
    }

    /// Set column names to be paired positionally with [`types`](Self::types).
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self.paired_at.get_or_insert(self.defs.len());
        self
    }

    /// Set column types to be paired positionally with [`columns`](Self::columns).
    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self.paired_at.get_or_insert(self.defs.len());
        self
    }

    /// Add a primary key on an existing column.
    pub fn primary(mut self, column: impl Into<String>) -> Self {
        self.primary = Some(column.into());
        self
    }

    /// Add a unique constraint on an existing column.
    pub fn unique(mut self, column: impl Into<String>) -> Self {
        self.unique = Some(column.into());
        self
    }

    fn all_columns(&self) -> Vec<ColumnDef> {
        let paired = self
            .names
            .iter()
            .zip(&self.types)
            .map(|(name, ty)| ColumnDef::new(name.as_str(), ty.as_str()));
        let (before, after) = self.defs.split_at(self.paired_at.unwrap_or(self.defs.len()));
        before.iter().cloned().chain(paired).chain(after.iter().cloned()).collect()
    }

    fn has_column(&self, name: &str) -> bool {
        self.defs.iter().any(|c| c.name == name) || self.names.iter().any(|n| n == name)
    }

    fn qualified_table(&self) -> String {
        Ident::qualified(self.schema.as_str(), self.table.as_str()).to_sql()
    }
}

macro_rules! typed_columns {
    ($($plain:ident, $with:ident => $ty:literal;)*) => {
        impl CreateTableBuilder {
            $(
                #[doc = concat!("Append a `", $ty, "` column.")]
                pub fn $plain(self, name: impl Into<String>) -> Self {
                    self.add_column(ColumnDef::new(name, $ty))
                }

                #[doc = concat!(
                    "Append a `", $ty, "` column with extra modifiers such as `NOT NULL`."
                )]
                pub fn $with<I, S>(self, name: impl Into<String>, extras: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.add_column(ColumnDef::new(name, $ty).extras(extras))
                }
            )*
        }
    };
}

typed_columns! {
    uuid_column, uuid_column_with => "UUID";
    string_column, string_column_with => "VARCHAR(255)";
    text_column, text_column_with => "TEXT";
    date_column, date_column_with => "DATE";
    boolean_column, boolean_column_with => "BOOLEAN";
    integer_column, integer_column_with => "INTEGER";
    int_column, int_column_with => "INT";
    timestamp_column, timestamp_column_with => "TIMESTAMP";
    time_column, time_column_with => "TIME";
    datetime_column, datetime_column_with => "DATETIME";
    json_column, json_column_with => "JSON";
    jsonb_column, jsonb_column_with => "JSONB";
    blob_column, blob_column_with => "BLOB";
    real_column, real_column_with => "REAL";
    float_column, float_column_with => "FLOAT";
}

impl SqlStatement for CreateTableBuilder {
    fn kind(&self) -> &'static str {
        "create_table"
    }

    fn validate(&self) -> BobResult<()> {
        if self.table.is_empty() {
            return Err(BobError::validation("create statements must specify a table"));
        }
        if self.names.len() != self.types.len() {
            return Err(BobError::validation(
                "columns and types should have equal length",
            ));
        }
        if self.defs.is_empty() && self.names.is_empty() {
            return Err(BobError::validation("a table should at least have one column"));
        }
        if let Some(primary) = &self.primary {
            if !self.has_column(primary) {
                return Err(BobError::validation(
                    "supplied primary column name doesn't exists on columns",
                ));
            }
        }
        if let Some(unique) = &self.unique {
            if !self.has_column(unique) {
                return Err(BobError::validation(
                    "supplied unique column name doesn't exists on columns",
                ));
            }
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        let table = self.qualified_table();
        let mut sql = String::from("CREATE TABLE ");

        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }

        sql.push_str(&table);
        sql.push_str(" (");
        let columns: Vec<String> = self.all_columns().iter().map(ColumnDef::to_sql).collect();
        sql.push_str(&columns.join(", "));
        sql.push_str(");");

        if let Some(primary) = &self.primary {
            sql.push_str(&format!(" ALTER TABLE {table} ADD PRIMARY KEY ({});", quote(primary)));
        }
        if let Some(unique) = &self.unique {
            sql.push_str(&format!(" ALTER TABLE {table} ADD UNIQUE ({});", quote(unique)));
        }

        CompiledSql::sql_only(sql)
    }
}
