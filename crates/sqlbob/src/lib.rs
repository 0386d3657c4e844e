//! # sqlbob
//!
//! Fluent builders that turn schema operations and dialect-aware UPSERTs
//! into SQL text plus an ordered argument list. Nothing here touches a
//! database: the output is handed to whatever driver the caller uses.
//!
//! ## Statements
//!
//! ```
//! use sqlbob::{create_table, has_table, upsert, Dialect, SqlStatement, DOLLAR};
//!
//! // DDL
//! let sql = create_table("users")
//!     .uuid_column_with("id", ["PRIMARY KEY"])
//!     .string_column_with("email", ["NOT NULL", "UNIQUE"])
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     r#"CREATE TABLE "users" ("id" UUID PRIMARY KEY, "email" VARCHAR(255) NOT NULL UNIQUE);"#
//! );
//!
//! // Existence checks
//! let compiled = has_table("users").placeholder_format(DOLLAR).compile().unwrap();
//! assert!(compiled.sql.contains("table_name = $1"));
//!
//! // UPSERT
//! let compiled = upsert("users", Dialect::MySql)
//!     .columns(["name", "email"])
//!     .values(["John Doe", "john@doe.com"])
//!     .replace("name", "John Does")
//!     .compile()
//!     .unwrap();
//! assert_eq!(compiled.args.len(), 3);
//! ```
//!
//! ## Features
//!
//! - `postgres` (default): [`Arg`] implements `tokio_postgres::types::ToSql`
//! - `tracing` (default): compiled statements are logged at `DEBUG` on target `sqlbob.sql`

pub mod arg;
pub mod bob;
pub mod config;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod placeholder;
pub mod statement;

mod trace;

pub use arg::{Arg, collect_args};
pub use bob::Bob;
pub use config::BobConfig;
pub use dialect::{Dialect, IntoDialect};
pub use error::{BobError, BobResult};
pub use ident::Ident;
pub use placeholder::{AT_P, COLON, DOLLAR, QUESTION, replace_placeholders};
pub use statement::{
    AlterAction, AlterBuilder, Batch, ColumnDef, CompiledSql, CreateIndexBuilder,
    CreateTableBuilder, DropBehavior, DropTableBuilder, HasBuilder, IndexColumn,
    RenameTableBuilder, SqlStatement, Statement, TruncateBuilder, UpsertBuilder,
};

/// `CREATE TABLE "table" (...)`
pub fn create_table(table: impl Into<String>) -> CreateTableBuilder {
    CreateTableBuilder::new(table)
}

/// `CREATE TABLE IF NOT EXISTS "table" (...)`
pub fn create_table_if_not_exists(table: impl Into<String>) -> CreateTableBuilder {
    CreateTableBuilder::new(table).if_not_exists()
}

/// `CREATE INDEX name ON ...`
pub fn create_index(name: impl Into<String>) -> CreateIndexBuilder {
    CreateIndexBuilder::new(name)
}

/// `CREATE INDEX IF NOT EXISTS name ON ...`
pub fn create_index_if_not_exists(name: impl Into<String>) -> CreateIndexBuilder {
    CreateIndexBuilder::new(name).if_not_exists()
}

/// Check whether `table` exists.
pub fn has_table(table: impl Into<String>) -> HasBuilder {
    HasBuilder::new().has_table(table)
}

/// Check whether `column` exists; pair with [`HasBuilder::has_table`].
pub fn has_column(column: impl Into<String>) -> HasBuilder {
    HasBuilder::new().has_column(column)
}

/// `DROP TABLE "table"`
pub fn drop_table(table: impl Into<String>) -> DropTableBuilder {
    DropTableBuilder::new(table)
}

/// `DROP TABLE IF EXISTS "table"`
pub fn drop_table_if_exists(table: impl Into<String>) -> DropTableBuilder {
    DropTableBuilder::new(table).if_exists()
}

/// `RENAME TABLE "from" TO "to"`
pub fn rename_table(from: impl Into<String>, to: impl Into<String>) -> RenameTableBuilder {
    RenameTableBuilder::new(from, to)
}

/// `TRUNCATE "table"`
pub fn truncate(table: impl Into<String>) -> TruncateBuilder {
    TruncateBuilder::new(table)
}

/// Insert rows, updating the listed columns when the row already exists.
pub fn upsert(table: impl Into<String>, dialect: impl IntoDialect) -> UpsertBuilder {
    UpsertBuilder::new(table, dialect)
}

/// `ALTER TABLE table DROP COLUMN column`
pub fn drop_column(table: impl Into<String>, column: impl Into<String>) -> AlterBuilder {
    AlterBuilder::drop_column(table, column)
}

/// `ALTER TABLE table DROP CONSTRAINT constraint`
pub fn drop_constraint(table: impl Into<String>, constraint: impl Into<String>) -> AlterBuilder {
    AlterBuilder::drop_constraint(table, constraint)
}

/// `ALTER TABLE table RENAME COLUMN from TO to`
pub fn rename_column(
    table: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> AlterBuilder {
    AlterBuilder::rename_column(table, from, to)
}

/// `ALTER TABLE table RENAME CONSTRAINT from TO to`
pub fn rename_constraint(
    table: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> AlterBuilder {
    AlterBuilder::rename_constraint(table, from, to)
}
