//! Statement arguments.
//!
//! Compiled statements carry their bound values as an ordered `Vec<Arg>`,
//! aligned one-to-one with the placeholders in the SQL text.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single bound value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    /// SQL `NULL`
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

impl Arg {
    /// Whether this is the empty string.
    ///
    /// Only text can be "empty"; `Int(0)`, `Bool(false)` and `Null` are not.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Arg::Text(s) if s.is_empty())
    }
}

/// Collect values into an argument list, skipping empty strings.
///
/// Empty strings leave no trace at all (not even a `NULL`), which is how
/// optional fragments such as a schema qualifier stay aligned with their
/// placeholders. Every non-text value is kept, including `0` and `false`.
///
/// # Example
/// ```
/// use sqlbob::{collect_args, Arg};
///
/// let args = collect_args(["users", "", "public"]);
/// assert_eq!(args, vec![Arg::from("users"), Arg::from("public")]);
/// ```
pub fn collect_args<I>(values: I) -> Vec<Arg>
where
    I: IntoIterator,
    I::Item: Into<Arg>,
{
    values
        .into_iter()
        .map(Into::into)
        .filter(|arg| !arg.is_empty_text())
        .collect()
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("NULL"),
            Arg::Bool(v) => write!(f, "{v}"),
            Arg::Int(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Text(v) => f.write_str(v),
            Arg::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Arg::Json(v) => write!(f, "{v}"),
            Arg::Uuid(v) => write!(f, "{v}"),
            Arg::Date(v) => write!(f, "{v}"),
            Arg::Timestamp(v) => write!(f, "{v}"),
            Arg::TimestampTz(v) => write!(f, "{}", v.to_rfc3339()),
        }
    }
}

macro_rules! impl_from_for_arg {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value $(as $cast)?)
                }
            }
        )*
    };
}

impl_from_for_arg!(
    bool => Bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int,
    u8 => Int as i64,
    u16 => Int as i64,
    u32 => Int as i64,
    f32 => Float as f64,
    f64 => Float,
    String => Text,
    Vec<u8> => Bytes,
    serde_json::Value => Json,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveDateTime => Timestamp,
    DateTime<Utc> => TimestampTz,
);

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<&[u8]> for Arg {
    fn from(value: &[u8]) -> Self {
        Arg::Bytes(value.to_vec())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

#[cfg(feature = "postgres")]
mod postgres {
    use super::Arg;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type};

    impl ToSql for Arg {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                Arg::Null => Ok(IsNull::Yes),
                Arg::Bool(v) => v.to_sql_checked(ty, out),
                Arg::Int(v) => match *ty {
                    Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
                    Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
                    _ => v.to_sql_checked(ty, out),
                },
                Arg::Float(v) => match *ty {
                    Type::FLOAT4 => (*v as f32).to_sql_checked(ty, out),
                    _ => v.to_sql_checked(ty, out),
                },
                Arg::Text(v) => v.to_sql_checked(ty, out),
                Arg::Bytes(v) => v.to_sql_checked(ty, out),
                Arg::Json(v) => v.to_sql_checked(ty, out),
                Arg::Uuid(v) => v.to_sql_checked(ty, out),
                Arg::Date(v) => v.to_sql_checked(ty, out),
                Arg::Timestamp(v) => v.to_sql_checked(ty, out),
                Arg::TimestampTz(v) => v.to_sql_checked(ty, out),
            }
        }

        // Each variant checks its own type in `to_sql`.
        fn accepts(_ty: &Type) -> bool {
            true
        }

        tokio_postgres::types::to_sql_checked!();
    }
}
