//! Data model: schemas, typed columns, the growable builder and final tables

mod batch;
mod builder;
mod column;
mod record;
mod schema;
mod table;
mod value;

pub use builder::{BuildState, TableBuilder, DEFAULT_CAPACITY};
pub use column::ColumnData;
pub use record::Record;
pub use schema::{ColumnKind, ColumnRef, Schema};
pub use table::Table;
pub use value::CellValue;
