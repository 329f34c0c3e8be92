//! Statically typed rows

use crate::error::Result;

use super::schema::Schema;
use super::value::CellValue;

/// A row type with a fixed schema.
///
/// `into_row` must yield one value per schema column, in schema order.
pub trait Record {
    /// Schema shared by every value of this type
    fn schema() -> Result<Schema>;

    /// Cells of this record in column order
    fn into_row(self) -> Vec<CellValue>;
}
