//! Quoted SQL identifier rendering.
//!
//! Table, schema and column names in CREATE / DROP / RENAME / TRUNCATE and
//! UPSERT statements are wrapped in double quotes. An embedded `"` is
//! escaped as `""`, so a name can never terminate its own quoting.
//!
//! # Example
//! ```
//! use sqlbob::Ident;
//!
//! assert_eq!(Ident::new("users").to_sql(), r#""users""#);
//! assert_eq!(Ident::qualified("private", "users").to_sql(), r#""private"."users""#);
//! ```

/// A quoted, optionally dotted SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    parts: Vec<String>,
}

impl Ident {
    /// A single-part identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            parts: vec![name.into()],
        }
    }

    /// A `schema.name` identifier. An empty schema is left out.
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        let schema = schema.into();
        let mut parts = Vec::with_capacity(2);
        if !schema.is_empty() {
            parts.push(schema);
        }
        parts.push(name.into());
        Self { parts }
    }

    /// The unquoted parts.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        // dots + surrounding quotes (escapes may add more)
        let cap = self.parts.iter().map(|p| p.len() + 3).sum();
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            push_quoted(out, part);
        }
    }
}

/// Quote a single name.
pub(crate) fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    push_quoted(&mut out, name);
    out
}

/// Quote each name and join them with `", "`.
pub(crate) fn quote_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| quote(n.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_quoted(out: &mut String, name: &str) {
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
            out.push('"');
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}
