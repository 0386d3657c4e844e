//! RENAME TABLE builder.

use crate::error::{BobError, BobResult};
use crate::ident::quote;
use crate::statement::traits::{CompiledSql, SqlStatement};

/// RENAME TABLE builder.
#[derive(Debug, Clone)]
#[must_use]
pub struct RenameTableBuilder {
    from: String,
    to: String,
}

impl RenameTableBuilder {
    /// Rename table `from` to `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl SqlStatement for RenameTableBuilder {
    fn kind(&self) -> &'static str {
        "rename_table"
    }

    fn validate(&self) -> BobResult<()> {
        if self.from.is_empty() || self.to.is_empty() {
            return Err(BobError::validation("rename statement must specify a table"));
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        CompiledSql::sql_only(format!(
            "RENAME TABLE {} TO {};",
            quote(&self.from),
            quote(&self.to)
        ))
    }
}
