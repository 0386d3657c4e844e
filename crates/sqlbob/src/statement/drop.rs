//! DROP TABLE builder.

use crate::error::{BobError, BobResult};
use crate::ident::quote;
use crate::statement::traits::{CompiledSql, SqlStatement};

/// Trailing `CASCADE` / `RESTRICT` behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

impl DropBehavior {
    fn to_sql(self) -> &'static str {
        match self {
            DropBehavior::Cascade => "CASCADE",
            DropBehavior::Restrict => "RESTRICT",
        }
    }
}

/// DROP TABLE builder.
#[derive(Debug, Clone)]
#[must_use]
pub struct DropTableBuilder {
    table: String,
    if_exists: bool,
    behavior: Option<DropBehavior>,
}

impl DropTableBuilder {
    /// Create a builder dropping `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            if_exists: false,
            behavior: None,
        }
    }

    /// Add `IF EXISTS`.
    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    /// Append `CASCADE` (replaces `RESTRICT`).
    pub fn cascade(mut self) -> Self {
        self.behavior = Some(DropBehavior::Cascade);
        self
    }

    /// Append `RESTRICT` (replaces `CASCADE`).
    pub fn restrict(mut self) -> Self {
        self.behavior = Some(DropBehavior::Restrict);
        self
    }
}

impl SqlStatement for DropTableBuilder {
    fn kind(&self) -> &'static str {
        "drop_table"
    }

    fn validate(&self) -> BobResult<()> {
        if self.table.is_empty() {
            return Err(BobError::validation("drop statement must specify a table"));
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        let mut sql = String::from("DROP TABLE ");

        if self.if_exists {
            sql.push_str("IF EXISTS ");
        }

        sql.push_str(&quote(&self.table));

        if let Some(behavior) = self.behavior {
            sql.push(' ');
            sql.push_str(behavior.to_sql());
        }

        sql.push(';');
        CompiledSql::sql_only(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain() {
        assert_eq!(DropTableBuilder::new("users").to_sql().unwrap(), r#"DROP TABLE "users";"#);
    }

    #[test]
    fn if_exists() {
        assert_eq!(
            DropTableBuilder::new("users").if_exists().to_sql().unwrap(),
            r#"DROP TABLE IF EXISTS "users";"#
        );
    }

    #[test]
    fn cascade_and_restrict_last_wins() {
        assert_eq!(
            DropTableBuilder::new("users").cascade().to_sql().unwrap(),
            r#"DROP TABLE "users" CASCADE;"#
        );
        assert_eq!(
            DropTableBuilder::new("users").if_exists().cascade().restrict().to_sql().unwrap(),
            r#"DROP TABLE IF EXISTS "users" RESTRICT;"#
        );
    }

    #[test]
    fn missing_table() {
        let err = DropTableBuilder::new("").if_exists().compile().unwrap_err();
        assert_eq!(err.to_string(), "drop statement must specify a table");
    }
}
