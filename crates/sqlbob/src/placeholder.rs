//! Placeholder rewriting.
//!
//! Builders always emit generic `?` markers. [`replace_placeholders`] turns
//! them into the positional syntax a driver expects:
//!
//! | token | output           |
//! |-------|------------------|
//! | `?`   | `?, ?, ?`        |
//! | `$`   | `$1, $2, $3`     |
//! | `:`   | `:1, :2, :3`     |
//! | `@p`  | `@p1, @p2, @p3`  |
//!
//! The rewrite is purely textual. A `?` inside a quoted literal or an
//! identifier is indistinguishable from a marker and is numbered as well.

/// Generic `?` markers (the default).
pub const QUESTION: &str = "?";
/// PostgreSQL style `$1, $2, ...`.
pub const DOLLAR: &str = "$";
/// Oracle style `:1, :2, ...`.
pub const COLON: &str = ":";
/// SQL Server style `@p1, @p2, ...`.
pub const AT_P: &str = "@p";

/// Rewrite every `?` in `sql` using the given placeholder `format`.
///
/// An empty format or [`QUESTION`] returns the input unchanged. Any other
/// token is numbered: the n-th `?` (1-based, left to right) becomes
/// `format` followed by `n`.
///
/// # Example
/// ```
/// use sqlbob::placeholder::{replace_placeholders, DOLLAR};
///
/// let sql = replace_placeholders("a = ? AND b = ?", DOLLAR);
/// assert_eq!(sql, "a = $1 AND b = $2");
/// ```
pub fn replace_placeholders(sql: &str, format: &str) -> String {
    if format.is_empty() || format == QUESTION {
        return sql.to_string();
    }

    let markers = sql.matches('?').count();
    let mut out = String::with_capacity(sql.len() + markers * (format.len() + 2));
    let mut idx = 0usize;
    for ch in sql.chars() {
        if ch == '?' {
            idx += 1;
            out.push_str(format);
            out.push_str(&idx.to_string());
        } else {
            out.push(ch);
        }
    }
    out
}
