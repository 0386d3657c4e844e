//! Root builder carrying shared defaults.

use crate::config::BobConfig;
use crate::dialect::IntoDialect;
use crate::statement::{
    AlterBuilder, Batch, CreateIndexBuilder, CreateTableBuilder, DropTableBuilder, HasBuilder,
    RenameTableBuilder, TruncateBuilder, UpsertBuilder,
};

/// Entry point that stamps a [`BobConfig`] onto every builder it creates.
///
/// The free functions at the crate root behave like `Bob::new()`.
///
/// ```
/// use sqlbob::{Bob, BobConfig, SqlStatement};
///
/// let bob = Bob::with_config(BobConfig::new().schema("private"));
/// let sql = bob.create_table("users").text_column("name").to_sql().unwrap();
/// assert_eq!(sql, r#"CREATE TABLE "private"."users" ("name" TEXT);"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bob {
    config: BobConfig,
}

impl Bob {
    /// A root with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BobConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BobConfig {
        &self.config
    }

    fn schema(&self) -> Option<&str> {
        self.config.schema.as_deref().filter(|s| !s.is_empty())
    }

    pub fn create_table(&self, table: impl Into<String>) -> CreateTableBuilder {
        let builder = CreateTableBuilder::new(table);
        match self.schema() {
            Some(schema) => builder.with_schema(schema),
            None => builder,
        }
    }

    pub fn create_table_if_not_exists(&self, table: impl Into<String>) -> CreateTableBuilder {
        self.create_table(table).if_not_exists()
    }

    pub fn create_index(&self, name: impl Into<String>) -> CreateIndexBuilder {
        CreateIndexBuilder::new(name)
    }

    pub fn create_index_if_not_exists(&self, name: impl Into<String>) -> CreateIndexBuilder {
        CreateIndexBuilder::new(name).if_not_exists()
    }

    pub fn has_table(&self, table: impl Into<String>) -> HasBuilder {
        self.has().has_table(table)
    }

    pub fn has_column(&self, column: impl Into<String>) -> HasBuilder {
        self.has().has_column(column)
    }

    fn has(&self) -> HasBuilder {
        let builder = HasBuilder::new().placeholder_format(self.config.placeholder_format.as_str());
        match self.schema() {
            Some(schema) => builder.with_schema(schema),
            None => builder,
        }
    }

    pub fn drop_table(&self, table: impl Into<String>) -> DropTableBuilder {
        DropTableBuilder::new(table)
    }

    pub fn drop_table_if_exists(&self, table: impl Into<String>) -> DropTableBuilder {
        DropTableBuilder::new(table).if_exists()
    }

    pub fn rename_table(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> RenameTableBuilder {
        RenameTableBuilder::new(from, to)
    }

    pub fn truncate(&self, table: impl Into<String>) -> TruncateBuilder {
        TruncateBuilder::new(table)
    }

    pub fn upsert(&self, table: impl Into<String>, dialect: impl IntoDialect) -> UpsertBuilder {
        UpsertBuilder::new(table, dialect)
            .placeholder_format(self.config.placeholder_format.as_str())
    }

    pub fn drop_column(&self, table: impl Into<String>, column: impl Into<String>) -> AlterBuilder {
        AlterBuilder::drop_column(table, column)
    }

    pub fn drop_constraint(
        &self,
        table: impl Into<String>,
        constraint: impl Into<String>,
    ) -> AlterBuilder {
        AlterBuilder::drop_constraint(table, constraint)
    }

    pub fn rename_column(
        &self,
        table: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> AlterBuilder {
        AlterBuilder::rename_column(table, from, to)
    }

    pub fn rename_constraint(
        &self,
        table: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> AlterBuilder {
        AlterBuilder::rename_constraint(table, from, to)
    }

    pub fn batch(&self) -> Batch {
        Batch::new()
    }
}
