//! Statement builders.
//!
//! Every builder is an owned value configured through `mut self -> Self`
//! setters and compiled through [`SqlStatement`]. To branch a chain, clone
//! the builder first; the copies never share state.

mod alter;
mod batch;
mod create;
mod create_index;
mod drop;
mod has;
mod rename;
mod traits;
mod truncate;
mod upsert;

pub use alter::{AlterAction, AlterBuilder};
pub use batch::Batch;
pub use create::{ColumnDef, CreateTableBuilder};
pub use create_index::{CreateIndexBuilder, IndexColumn};
pub use drop::{DropBehavior, DropTableBuilder};
pub use has::HasBuilder;
pub use rename::RenameTableBuilder;
pub use traits::{CompiledSql, SqlStatement};
pub use truncate::TruncateBuilder;
pub use upsert::UpsertBuilder;

use crate::error::BobResult;

/// Any statement builder, for heterogeneous collections such as [`Batch`].
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTableBuilder),
    CreateIndex(CreateIndexBuilder),
    DropTable(DropTableBuilder),
    RenameTable(RenameTableBuilder),
    Truncate(TruncateBuilder),
    Alter(AlterBuilder),
    Has(HasBuilder),
    Upsert(UpsertBuilder),
}

macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            Statement::CreateTable($inner) => $body,
            Statement::CreateIndex($inner) => $body,
            Statement::DropTable($inner) => $body,
            Statement::RenameTable($inner) => $body,
            Statement::Truncate($inner) => $body,
            Statement::Alter($inner) => $body,
            Statement::Has($inner) => $body,
            Statement::Upsert($inner) => $body,
        }
    };
}

impl SqlStatement for Statement {
    fn kind(&self) -> &'static str {
        dispatch!(self, s => s.kind())
    }

    fn validate(&self) -> BobResult<()> {
        dispatch!(self, s => s.validate())
    }

    fn build(&self) -> CompiledSql {
        dispatch!(self, s => s.build())
    }

    // Delegate so the inner builder's own compile (and its log event) runs once.
    fn compile(&self) -> BobResult<CompiledSql> {
        dispatch!(self, s => s.compile())
    }
}

macro_rules! impl_from_builder {
    ($($variant:ident($builder:ty)),* $(,)?) => {
        $(
            impl From<$builder> for Statement {
                fn from(builder: $builder) -> Self {
                    Statement::$variant(builder)
                }
            }
        )*
    };
}

impl_from_builder!(
    CreateTable(CreateTableBuilder),
    CreateIndex(CreateIndexBuilder),
    DropTable(DropTableBuilder),
    RenameTable(RenameTableBuilder),
    Truncate(TruncateBuilder),
    Alter(AlterBuilder),
    Has(HasBuilder),
    Upsert(UpsertBuilder),
);
