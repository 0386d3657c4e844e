//! Dialect-aware UPSERT builder.
//!
//! The statement is assembled with generic `?` markers and rewritten to the
//! configured placeholder format at the end. Arguments are collected in the
//! exact order their markers appear:
//!
//! - MySQL: `INSERT ... VALUES (...) ON DUPLICATE KEY UPDATE ...`
//! - PostgreSQL / SQLite: `INSERT ... VALUES (...) ON CONFLICT ("key") DO UPDATE SET ...`
//! - MSSQL: `IF NOT EXISTS (SELECT ...) INSERT ... ELSE UPDATE ... WHERE "key" = ?`
//!
//! For MSSQL the existing key value is bound twice: first for the existence
//! check and last for the UPDATE's WHERE clause. A stale key value races
//! between the two branches; callers own that.

use crate::arg::Arg;
use crate::dialect::{Dialect, IntoDialect};
use crate::error::{BobError, BobResult};
use crate::ident::{quote, quote_list};
use crate::placeholder::{QUESTION, replace_placeholders};
use crate::statement::traits::{CompiledSql, SqlStatement};

/// The column checked for an existing row, plus its current value (MSSQL).
#[derive(Debug, Clone, PartialEq)]
struct ConflictKey {
    column: String,
    value: Option<Arg>,
}

/// UPSERT builder.
///
/// # Example
/// ```
/// use sqlbob::{upsert, Dialect, SqlStatement, DOLLAR};
///
/// let compiled = upsert("users", Dialect::PostgreSql)
///     .columns(["name", "email"])
///     .values(["John Doe", "john@doe.com"])
///     .key("email")
///     .replace("name", "John Does")
///     .placeholder_format(DOLLAR)
///     .compile()
///     .unwrap();
///
/// assert_eq!(
///     compiled.sql,
///     r#"INSERT INTO "users" ("name", "email") VALUES ($1, $2) ON CONFLICT ("email") DO UPDATE SET "name" = $3;"#
/// );
/// assert_eq!(compiled.args.len(), 3);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct UpsertBuilder {
    dialect: Option<Dialect>,
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<Arg>>,
    key: Option<ConflictKey>,
    replacements: Vec<(String, Arg)>,
    placeholder: String,
}

impl UpsertBuilder {
    /// Create an UPSERT builder for `table`.
    ///
    /// `dialect` may be a [`Dialect`] or its raw integer code; an unknown
    /// code is reported when compiling.
    pub fn new(table: impl Into<String>, dialect: impl IntoDialect) -> Self {
        Self {
            dialect: dialect.into_dialect(),
            table: table.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            key: None,
            replacements: Vec::new(),
            placeholder: QUESTION.to_string(),
        }
    }

    /// Append the columns being inserted.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append one row of values, positionally aligned with the columns.
    ///
    /// Call repeatedly for a multi-row insert.
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Arg>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the conflict key column (PostgreSQL and SQLite).
    ///
    /// There is a single conflict key: a later `key` or
    /// [`key_value`](Self::key_value) call replaces an earlier one rather
    /// than adding a second key column.
    pub fn key(mut self, column: impl Into<String>) -> Self {
        self.key = Some(ConflictKey {
            column: column.into(),
            value: None,
        });
        self
    }

    /// Set the conflict key column and its current value (required for MSSQL).
    ///
    /// Replaces any key set earlier.
    pub fn key_value(mut self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.key = Some(ConflictKey {
            column: column.into(),
            value: Some(value.into()),
        });
        self
    }

    /// Append a `column = value` pair applied when the row already exists.
    pub fn replace(mut self, column: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.replacements.push((column.into(), value.into()));
        self
    }

    /// Change the placeholder token (`?` by default).
    pub fn placeholder_format(mut self, format: impl Into<String>) -> Self {
        self.placeholder = format.into();
        self
    }

    fn key_column(&self) -> Option<&str> {
        self.key
            .as_ref()
            .map(|k| k.column.as_str())
            .filter(|c| !c.is_empty())
    }

    fn key_arg(&self) -> Option<&Arg> {
        self.key
            .as_ref()
            .and_then(|k| k.value.as_ref())
            .filter(|v| !v.is_empty_text())
    }

    fn validate_key(&self, dialect: Dialect) -> BobResult<()> {
        if !dialect.requires_conflict_key() {
            return Ok(());
        }
        if dialect == Dialect::MsSql {
            if self.key_column().is_none() || self.key_arg().is_none() {
                return Err(BobError::validation(
                    "unique key and value must be provided for MS SQL",
                ));
            }
            return Ok(());
        }
        if self.key_column().is_none() {
            return Err(BobError::validation(
                "unique key must be provided for PostgreSQL and SQLite",
            ));
        }
        Ok(())
    }
}

impl SqlStatement for UpsertBuilder {
    fn kind(&self) -> &'static str {
        "upsert"
    }

    fn validate(&self) -> BobResult<()> {
        if self.table.is_empty() {
            return Err(BobError::validation("upsert statements must specify a table"));
        }
        if self.columns.first().is_none_or(|c| c.is_empty()) {
            return Err(BobError::validation(
                "upsert statement must have at least one column",
            ));
        }
        if self.rows.is_empty() {
            return Err(BobError::validation(
                "upsert statements must have at least one set of values",
            ));
        }
        if self.rows.iter().any(Vec::is_empty) {
            return Err(BobError::validation("upsert value rows must not be empty"));
        }
        if self.replacements.is_empty() {
            return Err(BobError::validation(
                "upsert statement must have at least one key value pair to be replaced",
            ));
        }
        let dialect = self.dialect.ok_or(BobError::UnsupportedDialect)?;
        self.validate_key(dialect)
    }

    fn build(&self) -> CompiledSql {
        let table = quote(&self.table);
        let key_column = self.key_column().map(quote).unwrap_or_default();
        let key_arg = self.key_arg().cloned().unwrap_or(Arg::Null);

        let mut sql = String::new();
        let mut args = Vec::new();

        if self.dialect == Some(Dialect::MsSql) {
            sql.push_str("IF NOT EXISTS (SELECT * FROM ");
            sql.push_str(&table);
            sql.push_str(" WHERE ");
            sql.push_str(&key_column);
            sql.push_str(" = ?) ");
            args.push(key_arg.clone());
        }

        sql.push_str("INSERT INTO ");
        sql.push_str(&table);
        sql.push_str(" (");
        sql.push_str(&quote_list(&self.columns));
        sql.push_str(") VALUES ");

        let tuples: Vec<String> = self
            .rows
            .iter()
            .map(|row| {
                args.extend(row.iter().cloned());
                format!("({})", vec![QUESTION; row.len()].join(", "))
            })
            .collect();
        sql.push_str(&tuples.join(", "));
        sql.push(' ');

        let replaces: Vec<String> = self
            .replacements
            .iter()
            .map(|(column, value)| {
                args.push(value.clone());
                format!("{} = ?", quote(column))
            })
            .collect();
        let replaces = replaces.join(", ");

        match self.dialect {
            Some(Dialect::MySql) => {
                sql.push_str("ON DUPLICATE KEY UPDATE ");
                sql.push_str(&replaces);
            }
            Some(Dialect::PostgreSql | Dialect::Sqlite) => {
                sql.push_str("ON CONFLICT (");
                sql.push_str(&key_column);
                sql.push_str(") DO UPDATE SET ");
                sql.push_str(&replaces);
            }
            Some(Dialect::MsSql) => {
                sql.push_str("ELSE UPDATE ");
                sql.push_str(&table);
                sql.push_str(" SET ");
                sql.push_str(&replaces);
                sql.push_str(" WHERE ");
                sql.push_str(&key_column);
                sql.push_str(" = ?");
                args.push(key_arg);
            }
            None => {}
        }

        sql.push(';');

        CompiledSql::new(replace_placeholders(&sql, &self.placeholder), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::{AT_P, DOLLAR};

    fn users(dialect: impl IntoDialect) -> UpsertBuilder {
        UpsertBuilder::new("users", dialect)
            .columns(["name", "email"])
            .values(["John Doe", "john@doe.com"])
            .replace("name", "John Does")
    }

    #[test]
    fn mysql() {
        let compiled = users(Dialect::MySql).compile().unwrap();
        assert_eq!(
            compiled.sql,
            r#"INSERT INTO "users" ("name", "email") VALUES (?, ?) ON DUPLICATE KEY UPDATE "name" = ?;"#
        );
        assert_eq!(
            compiled.args,
            vec![Arg::from("John Doe"), Arg::from("john@doe.com"), Arg::from("John Does")]
        );
    }

    #[test]
    fn postgres_with_dollar() {
        let compiled = users(Dialect::PostgreSql)
            .key("email")
            .placeholder_format(DOLLAR)
            .compile()
            .unwrap();
        assert_eq!(
            compiled.sql,
            r#"INSERT INTO "users" ("name", "email") VALUES ($1, $2) ON CONFLICT ("email") DO UPDATE SET "name" = $3;"#
        );
        assert_eq!(compiled.args.len(), 3);
    }

    #[test]
    fn sqlite_with_question() {
        let compiled = users(Dialect::Sqlite).key("email").compile().unwrap();
        assert_eq!(
            compiled.sql,
            r#"INSERT INTO "users" ("name", "email") VALUES (?, ?) ON CONFLICT ("email") DO UPDATE SET "name" = ?;"#
        );
    }

    #[test]
    fn mssql_binds_key_value_first_and_last() {
        let compiled = users(Dialect::MsSql)
            .key_value("email", "john@doe.com")
            .placeholder_format(AT_P)
            .compile()
            .unwrap();
        assert_eq!(
            compiled.sql,
            r#"IF NOT EXISTS (SELECT * FROM "users" WHERE "email" = @p1) INSERT INTO "users" ("name", "email") VALUES (@p2, @p3) ELSE UPDATE "users" SET "name" = @p4 WHERE "email" = @p5;"#
        );
        assert_eq!(
            compiled.args,
            vec![
                Arg::from("john@doe.com"),
                Arg::from("John Doe"),
                Arg::from("john@doe.com"),
                Arg::from("John Does"),
                Arg::from("john@doe.com"),
            ]
        );
    }

    #[test]
    fn multiple_rows_are_row_major() {
        let compiled = UpsertBuilder::new("users", Dialect::MySql)
            .columns(["name", "age"])
            .values([Arg::from("a"), Arg::from(1)])
            .values([Arg::from("b"), Arg::from(2)])
            .replace("age", 3)
            .compile()
            .unwrap();
        assert_eq!(
            compiled.sql,
            r#"INSERT INTO "users" ("name", "age") VALUES (?, ?), (?, ?) ON DUPLICATE KEY UPDATE "age" = ?;"#
        );
        assert_eq!(
            compiled.args,
            vec![Arg::from("a"), Arg::Int(1), Arg::from("b"), Arg::Int(2), Arg::Int(3)]
        );
    }

    #[test]
    fn multiple_replacements() {
        let compiled = users(Dialect::PostgreSql)
            .key("email")
            .replace("email", "new@doe.com")
            .compile()
            .unwrap();
        assert!(compiled.sql.ends_with(r#"DO UPDATE SET "name" = ?, "email" = ?;"#));
        assert_eq!(compiled.args.last(), Some(&Arg::from("new@doe.com")));
    }

    #[test]
    fn columns_extend_across_calls() {
        let compiled = UpsertBuilder::new("t", Dialect::MySql)
            .columns(["a"])
            .columns(["b"])
            .values([1, 2])
            .replace("a", 3)
            .compile()
            .unwrap();
        assert!(compiled.sql.starts_with(r#"INSERT INTO "t" ("a", "b")"#));
    }

    #[test]
    fn raw_dialect_code() {
        let compiled = users(1).key("email").compile().unwrap();
        assert!(compiled.sql.contains("ON CONFLICT"));
    }

    #[test]
    fn validation_order() {
        let err = UpsertBuilder::new("", Dialect::MySql).compile().unwrap_err();
        assert_eq!(err.to_string(), "upsert statements must specify a table");

        let err = UpsertBuilder::new("users", Dialect::MySql).compile().unwrap_err();
        assert_eq!(err.to_string(), "upsert statement must have at least one column");

        let err = UpsertBuilder::new("users", Dialect::MySql)
            .columns([""])
            .compile()
            .unwrap_err();
        assert_eq!(err.to_string(), "upsert statement must have at least one column");

        let err = UpsertBuilder::new("users", Dialect::MySql)
            .columns(["name"])
            .compile()
            .unwrap_err();
        assert_eq!(err.to_string(), "upsert statements must have at least one set of values");

        let err = UpsertBuilder::new("users", Dialect::MySql)
            .columns(["name"])
            .values(["x"])
            .compile()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "upsert statement must have at least one key value pair to be replaced"
        );
    }

    #[test]
    fn postgres_and_sqlite_need_key() {
        for dialect in [Dialect::PostgreSql, Dialect::Sqlite] {
            let err = users(dialect).compile().unwrap_err();
            assert_eq!(err.to_string(), "unique key must be provided for PostgreSQL and SQLite");
        }
        let err = users(Dialect::PostgreSql).key("").compile().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn mssql_needs_key_and_value() {
        let msg = "unique key and value must be provided for MS SQL";
        assert_eq!(users(Dialect::MsSql).compile().unwrap_err().to_string(), msg);
        assert_eq!(users(Dialect::MsSql).key("email").compile().unwrap_err().to_string(), msg);
        assert_eq!(
            users(Dialect::MsSql).key_value("email", "").compile().unwrap_err().to_string(),
            msg
        );
        assert!(users(Dialect::MsSql).key_value("id", 0).compile().is_ok());
    }

    #[test]
    fn unknown_dialect_is_reported_last() {
        let err = users(7).compile().unwrap_err();
        assert_eq!(err, BobError::UnsupportedDialect);

        let err = UpsertBuilder::new("", 7).compile().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn later_key_overrides_earlier() {
        let compiled = users(Dialect::PostgreSql).key("name").key("email").compile().unwrap();
        assert!(compiled.sql.contains(r#"ON CONFLICT ("email")"#));

        let compiled = users(Dialect::MsSql)
            .key_value("name", "John Doe")
            .key("email")
            .compile();
        assert!(compiled.is_err());
    }

    #[test]
    fn empty_value_row_is_rejected() {
        let err = UpsertBuilder::new("t", Dialect::MySql)
            .columns(["a"])
            .values(Vec::<Arg>::new())
            .replace("a", 1)
            .compile()
            .unwrap_err();
        assert_eq!(err.to_string(), "upsert value rows must not be empty");

        let err = UpsertBuilder::new("t", Dialect::MySql)
            .columns(["a"])
            .values([1])
            .values(Vec::<Arg>::new())
            .replace("a", 1)
            .compile()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn compile_is_idempotent() {
        let builder = users(Dialect::MsSql).key_value("email", "john@doe.com");
        assert_eq!(builder.compile().unwrap(), builder.compile().unwrap());
    }
}
