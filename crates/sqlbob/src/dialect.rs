//! Target database dialects.
//!
//! The numeric codes are part of the public contract: callers coming from
//! other bindings may hand over raw integers instead of [`Dialect`] values.

use std::fmt;

use crate::error::BobError;

/// Database flavor controlling the shape of generated UPSERT statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dialect {
    /// `INSERT ... ON DUPLICATE KEY UPDATE`
    MySql = 0,
    /// `INSERT ... ON CONFLICT (key) DO UPDATE SET`
    PostgreSql = 1,
    /// Same shape as PostgreSQL.
    Sqlite = 2,
    /// `IF NOT EXISTS (...) INSERT ... ELSE UPDATE ...`
    MsSql = 3,
}

impl Dialect {
    /// All dialects in code order.
    pub const ALL: [Dialect; 4] = [
        Dialect::MySql,
        Dialect::PostgreSql,
        Dialect::Sqlite,
        Dialect::MsSql,
    ];

    /// The integer code of this dialect.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a dialect by its integer code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::MySql),
            1 => Some(Self::PostgreSql),
            2 => Some(Self::Sqlite),
            3 => Some(Self::MsSql),
            _ => None,
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "MySQL",
            Self::PostgreSql => "PostgreSQL",
            Self::Sqlite => "SQLite",
            Self::MsSql => "MSSQL",
        }
    }

    /// Whether an upsert in this dialect needs a conflict key column.
    pub const fn requires_conflict_key(self) -> bool {
        !matches!(self, Self::MySql)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Dialect {
    type Error = BobError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(BobError::UnsupportedDialect)
    }
}

/// Convert an input into a [`Dialect`], if it names a known one.
///
/// Unknown codes are not rejected here; the upsert builder reports them as
/// [`BobError::UnsupportedDialect`] when compiled.
pub trait IntoDialect {
    fn into_dialect(self) -> Option<Dialect>;
}

impl IntoDialect for Dialect {
    fn into_dialect(self) -> Option<Dialect> {
        Some(self)
    }
}

impl IntoDialect for Option<Dialect> {
    fn into_dialect(self) -> Option<Dialect> {
        self
    }
}

macro_rules! impl_into_dialect_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoDialect for $ty {
                fn into_dialect(self) -> Option<Dialect> {
                    i64::try_from(self).ok().and_then(Dialect::from_code)
                }
            }
        )*
    };
}

impl_into_dialect_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
