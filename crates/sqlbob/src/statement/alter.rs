//! ALTER TABLE builder for dropping / renaming columns and constraints.
//!
//! Names are emitted unquoted and the statement has no trailing `;`, so a
//! [`suffix`](AlterBuilder::suffix) such as `CASCADE` can follow.

use crate::error::{BobError, BobResult};
use crate::statement::traits::{CompiledSql, SqlStatement};

/// What an [`AlterBuilder`] changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterAction {
    DropColumn,
    DropConstraint,
    RenameColumn,
    RenameConstraint,
}

impl AlterAction {
    fn is_rename(self) -> bool {
        matches!(self, AlterAction::RenameColumn | AlterAction::RenameConstraint)
    }
}

/// ALTER TABLE builder.
#[derive(Debug, Clone)]
#[must_use]
pub struct AlterBuilder {
    action: AlterAction,
    table: String,
    first: String,
    second: String,
    suffix: String,
}

impl AlterBuilder {
    fn new(action: AlterAction, table: String, first: String, second: String) -> Self {
        Self {
            action,
            table,
            first,
            second,
            suffix: String::new(),
        }
    }

    /// `ALTER TABLE table DROP COLUMN column`
    pub fn drop_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::new(AlterAction::DropColumn, table.into(), column.into(), String::new())
    }

    /// `ALTER TABLE table DROP CONSTRAINT constraint`
    pub fn drop_constraint(table: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::new(AlterAction::DropConstraint, table.into(), constraint.into(), String::new())
    }

    /// `ALTER TABLE table RENAME COLUMN from TO to`
    pub fn rename_column(
        table: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(AlterAction::RenameColumn, table.into(), from.into(), to.into())
    }

    /// `ALTER TABLE table RENAME CONSTRAINT from TO to`
    pub fn rename_constraint(
        table: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(AlterAction::RenameConstraint, table.into(), from.into(), to.into())
    }

    /// Append free-form SQL after the statement (e.g. `CASCADE`).
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn action(&self) -> AlterAction {
        self.action
    }
}

impl SqlStatement for AlterBuilder {
    fn kind(&self) -> &'static str {
        "alter_table"
    }

    fn validate(&self) -> BobResult<()> {
        if self.table.is_empty() {
            return Err(BobError::validation("table name must not be empty"));
        }
        if self.first.is_empty() {
            return Err(BobError::validation("the second argument must not be empty"));
        }
        if self.action.is_rename() && self.second.is_empty() {
            return Err(BobError::validation("the third argument must not be empty"));
        }
        Ok(())
    }

    fn build(&self) -> CompiledSql {
        let mut sql = format!("ALTER TABLE {} ", self.table);

        match self.action {
            AlterAction::DropColumn => {
                sql.push_str(&format!("DROP COLUMN {}", self.first));
            }
            AlterAction::DropConstraint => {
                sql.push_str(&format!("DROP CONSTRAINT {}", self.first));
            }
            AlterAction::RenameColumn => {
                sql.push_str(&format!("RENAME COLUMN {} TO {}", self.first, self.second));
            }
            AlterAction::RenameConstraint => {
                sql.push_str(&format!("RENAME CONSTRAINT {} TO {}", self.first, self.second));
            }
        }

        if !self.suffix.is_empty() {
            sql.push(' ');
            sql.push_str(&self.suffix);
        }

        CompiledSql::sql_only(sql)
    }
}
