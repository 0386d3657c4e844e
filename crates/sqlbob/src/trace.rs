//! `tracing` hooks for compiled statements.
//!
//! Enable via the crate feature: `sqlbob = { features = ["tracing"] }`
//! (on by default). Events are emitted at `DEBUG` on target `sqlbob.sql`.
//! Without the feature these functions are no-ops.

use crate::error::{BobError, BobResult};
use crate::statement::CompiledSql;

/// SQL longer than this (in bytes) is truncated in log events.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) const MAX_LOGGED_SQL: usize = 200;

/// Log the outcome of a compile and hand the result back.
pub(crate) fn observe(
    kind: &'static str,
    result: BobResult<CompiledSql>,
) -> BobResult<CompiledSql> {
    match &result {
        Ok(compiled) => compiled_statement(kind, compiled),
        Err(err) => rejected_statement(kind, err),
    }
    result
}

#[cfg(feature = "tracing")]
fn compiled_statement(kind: &'static str, compiled: &CompiledSql) {
    let sql = truncate_sql(&compiled.sql, MAX_LOGGED_SQL);
    tracing::debug!(
        target: "sqlbob.sql",
        statement = kind,
        sql = %sql,
        args = compiled.args.len(),
        "compiled statement"
    );
}

#[cfg(feature = "tracing")]
fn rejected_statement(kind: &'static str, err: &BobError) {
    tracing::debug!(
        target: "sqlbob.sql",
        statement = kind,
        error = %err,
        "statement rejected"
    );
}

#[cfg(not(feature = "tracing"))]
fn compiled_statement(_kind: &'static str, _compiled: &CompiledSql) {}

#[cfg(not(feature = "tracing"))]
fn rejected_statement(_kind: &'static str, _err: &BobError) {}

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql(sql: &str, max_bytes: usize) -> std::borrow::Cow<'_, str> {
    if sql.len() <= max_bytes {
        return sql.into();
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &sql[..end]).into()
}
