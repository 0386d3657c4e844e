//! Several statements compiled into one SQL string.

use crate::error::BobResult;
use crate::statement::Statement;
use crate::statement::traits::{CompiledSql, SqlStatement};
use crate::trace;

/// An ordered list of statements compiled together.
///
/// SQL texts are joined with a separator (a single space by default) and
/// arguments are concatenated in statement order. Statements that compile
/// to empty SQL are skipped; the first statement error aborts the batch.
///
/// # Example
/// ```
/// use sqlbob::{drop_table_if_exists, create_table, Batch};
///
/// let compiled = Batch::new()
///     .push(drop_table_if_exists("users"))
///     .push(create_table("users").text_column("name"))
///     .compile()
///     .unwrap();
/// assert_eq!(
///     compiled.sql,
///     r#"DROP TABLE IF EXISTS "users"; CREATE TABLE "users" ("name" TEXT);"#
/// );
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct Batch {
    statements: Vec<Statement>,
    separator: String,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            statements: Vec::new(),
            separator: " ".to_string(),
        }
    }
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement.
    pub fn push(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }

    /// Change the separator placed between statements.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Compile every statement and join the results.
    pub fn compile(&self) -> BobResult<CompiledSql> {
        let mut out = CompiledSql::default();
        let mut first = true;

        for statement in &self.statements {
            let part = statement.compile()?;
            if part.sql.is_empty() {
                continue;
            }
            if !first {
                out.sql.push_str(&self.separator);
            }
            first = false;
            out.sql.push_str(&part.sql);
            out.args.extend(part.args);
        }

        trace::observe("batch", Ok(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg::Arg;
    use crate::dialect::Dialect;
    use crate::statement::{HasBuilder, TruncateBuilder, UpsertBuilder};

    #[test]
    fn empty_batch() {
        let batch = Batch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.compile().unwrap(), CompiledSql::default());
    }

    #[test]
    fn args_follow_statement_order() {
        let batch = Batch::new()
            .push(HasBuilder::new().has_table("users"))
            .push(
                UpsertBuilder::new("users", Dialect::MySql)
                    .columns(["name"])
                    .values(["a"])
                    .replace("name", "b"),
            )
            .separator("\n");
        assert_eq!(batch.len(), 2);

        let compiled = batch.compile().unwrap();
        assert_eq!(compiled.sql.lines().count(), 2);
        assert_eq!(
            compiled.args,
            vec![Arg::from("users"), Arg::from("a"), Arg::from("b")]
        );
    }

    #[test]
    fn first_error_aborts() {
        let err = Batch::new()
            .push(TruncateBuilder::new("users"))
            .push(TruncateBuilder::new(""))
            .compile()
            .unwrap_err();
        assert_eq!(err.to_string(), "truncate statement must specify a table");
    }
}
