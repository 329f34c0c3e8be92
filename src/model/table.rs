//! Finalized, immutable tables

use crate::error::{Result, TableError};

use super::column::ColumnData;
use super::schema::{ColumnKind, ColumnRef, Schema};
use super::value::CellValue;

/// A length-exact table produced by [`TableBuilder::finalize`].
///
/// Every column holds exactly `row_count` cells.
///
/// [`TableBuilder::finalize`]: super::TableBuilder::finalize
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: Schema,
    columns: Vec<ColumnData>,
    row_count: usize,
}

impl Table {
    pub(crate) fn new(schema: Schema, columns: Vec<ColumnData>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        Self {
            schema,
            columns,
            row_count,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.schema.names()
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&ColumnData> {
        self.column_index(name).and_then(|i| self.columns.get(i))
    }

    /// Get column by position
    pub fn column_at(&self, index: usize) -> Option<&ColumnData> {
        self.columns.get(index)
    }

    /// `(name, column)` pairs in order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
        self.schema.names().zip(self.columns.iter())
    }

    pub fn kind(&self, index: usize) -> Result<ColumnKind> {
        self.schema.kind(index).ok_or(TableError::ColumnOutOfRange {
            index,
            count: self.column_count(),
        })
    }

    /// Read a single cell
    pub fn get<'a>(&self, column: impl Into<ColumnRef<'a>>, row: usize) -> Result<CellValue> {
        let index = self.schema.resolve(column.into())?;
        self.columns
            .get(index)
            .and_then(|c| c.get(row))
            .ok_or(TableError::RowOutOfRange {
                index: row,
                len: self.row_count,
            })
    }

    /// All cells of one row, in column order
    pub fn row(&self, index: usize) -> Result<Vec<CellValue>> {
        if index >= self.row_count {
            return Err(TableError::RowOutOfRange {
                index,
                len: self.row_count,
            });
        }
        Ok(self.row_unchecked(index))
    }

    fn row_unchecked(&self, index: usize) -> Vec<CellValue> {
        self.columns.iter().filter_map(|c| c.get(index)).collect()
    }

    /// Iterate rows in insertion order
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        (0..self.row_count).map(move |i| self.row_unchecked(i))
    }
}
