//! TRUNCATE builder.

use crate::error::{BobError, BobResult};
use crate::ident::quote;
use crate::statement::traits::{CompiledSql, SqlStatement};

/// TRUNCATE builder. Deletes all rows but keeps the table.
#[derive(Debug, Clone)]
#[must_use]
pub struct TruncateBuilder {
    table: String,
}

impl TruncateBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl SqlStatement for TruncateBuilder {
    fn kind(&self) -> &'static str {
        "truncate"
    }

    fn validate(&self) -> BobResult<()> {
        if self.table.is_empty() {
            return Err(BobError::validation("truncate statement must specify a table"));
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        CompiledSql::sql_only(format!("TRUNCATE {};", quote(&self.table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate() {
        assert_eq!(TruncateBuilder::new("users").to_sql().unwrap(), r#"TRUNCATE "users";"#);
    }

    #[test]
    fn missing_table() {
        let err = TruncateBuilder::new("").compile().unwrap_err();
        assert_eq!(err.to_string(), "truncate statement must specify a table");
    }
}
