//! The compile contract shared by every statement builder.

use crate::arg::Arg;
use crate::error::BobResult;
use crate::trace;

/// Base trait for all statement builders.
///
/// `validate` checks the accumulated state and `build` renders it; `compile`
/// runs both, so SQL is only ever produced for a valid builder.
pub trait SqlStatement {
    /// Short statement kind used in log events (e.g. `"upsert"`).
    fn kind(&self) -> &'static str;

    /// Check required fields, returning the first problem found.
    fn validate(&self) -> BobResult<()>;

    /// Render SQL and arguments without validating.
    ///
    /// Output for an invalid builder is unspecified; prefer [`compile`](Self::compile).
    fn build(&self) -> CompiledSql;

    /// Validate, then render SQL text and its ordered arguments.
    ///
    /// Compiling is a pure function of the builder state, so calling it
    /// twice yields identical results.
    fn compile(&self) -> BobResult<CompiledSql> {
        trace::observe(self.kind(), self.validate().map(|()| self.build()))
    }

    /// Compile and keep only the SQL text.
    fn to_sql(&self) -> BobResult<String> {
        self.compile().map(|compiled| compiled.sql)
    }
}

/// The result of compiling a statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledSql {
    pub sql: String,
    pub args: Vec<Arg>,
}

impl CompiledSql {
    /// Create a compiled statement.
    pub fn new(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// A statement without arguments.
    pub fn sql_only(sql: impl Into<String>) -> Self {
        Self::new(sql, Vec::new())
    }

    /// Get arguments as references for tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args
            .iter()
            .map(|arg| arg as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}
