//! Growable table builder
//!
//! Rows are appended one at a time into columns that share a single
//! allocated length. When the columns are full every one of them doubles
//! together, so appends are amortized O(1). `finalize` trims the unused
//! tail once and hands the storage to an immutable [`Table`].

use tracing::{debug, trace};

use crate::error::{Result, TableError};

use super::column::ColumnData;
use super::record::Record;
use super::schema::{ColumnKind, ColumnRef, Schema};
use super::table::Table;
use super::value::CellValue;

/// Allocated length of a fresh builder
pub const DEFAULT_CAPACITY: usize = 8;

/// Lifecycle of a builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Building,
    Finalized,
}

/// Mutable, growable phase of a table
#[derive(Debug)]
pub struct TableBuilder {
    schema: Schema,
    columns: Vec<ColumnData>,
    /// Logically populated rows, shared by all columns
    data_length: usize,
    /// Slots allocated in every column
    allocated_length: usize,
    state: BuildState,
}

impl TableBuilder {
    /// Create a builder with the default capacity
    pub fn new(schema: Schema) -> Self {
        Self::allocate(schema, DEFAULT_CAPACITY)
    }

    /// Create a builder from `(name, kind)` pairs
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnKind)>,
        S: Into<String>,
    {
        Ok(Self::new(Schema::new(columns)?))
    }

    /// Create a builder with a custom, positive initial capacity
    pub fn with_capacity(schema: Schema, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::Schema(
                "initial capacity must be positive".to_string(),
            ));
        }
        Ok(Self::allocate(schema, capacity))
    }

    /// Create a builder for the schema of a record type
    pub fn for_record<R: Record>() -> Result<Self> {
        Ok(Self::new(R::schema()?))
    }

    fn allocate(schema: Schema, capacity: usize) -> Self {
        let columns = schema
            .iter()
            .map(|(_, kind)| ColumnData::zeroed(kind, capacity))
            .collect();

        debug!(columns = schema.len(), capacity, "created table builder");

        Self {
            schema,
            columns,
            data_length: 0,
            allocated_length: capacity,
            state: BuildState::Building,
        }
    }

    /// Append one row, given as one value per column in schema order.
    ///
    /// The whole row is validated before anything is written: on error the
    /// row count, capacity and every stored cell are unchanged.
    pub fn append_row<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = CellValue>,
    {
        if self.state == BuildState::Finalized {
            return Err(TableError::Finalized);
        }

        let values: Vec<CellValue> = values.into_iter().collect();
        self.check_row(&values)?;

        if self.data_length == self.allocated_length {
            self.grow();
        }

        let index = self.data_length;
        for (column, value) in self.columns.iter_mut().zip(values) {
            // check_row matched every kind and the slot exists after grow
            let stored = column.set(index, value);
            debug_assert!(stored.is_ok(), "unchecked cell reached column storage");
        }
        self.data_length += 1;

        Ok(())
    }

    /// Append a typed record
    pub fn append_record<R: Record>(&mut self, record: R) -> Result<()> {
        self.append_row(record.into_row())
    }

    fn check_row(&self, values: &[CellValue]) -> Result<()> {
        if values.len() != self.schema.len() {
            return Err(TableError::RowArity {
                expected: self.schema.len(),
                found: values.len(),
            });
        }

        for ((name, expected), value) in self.schema.iter().zip(values) {
            let found = value.kind();
            if found != expected {
                return Err(TableError::TypeMismatch {
                    column: name.to_string(),
                    expected,
                    found,
                });
            }
        }

        Ok(())
    }

    /// Double every column together
    fn grow(&mut self) {
        let new_len = self.allocated_length * 2;
        trace!(from = self.allocated_length, to = new_len, "growing table builder");

        for column in &mut self.columns {
            column.resize(new_len);
        }
        self.allocated_length = new_len;
    }

    /// Trim every column to the row count and produce the final table.
    ///
    /// This is a one-shot transition: afterwards the builder is read-only,
    /// rejecting appends with [`TableError::Finalized`] and a second call
    /// with [`TableError::AlreadyFinalized`]. Cells stay readable through
    /// [`get`](Self::get).
    pub fn finalize(&mut self) -> Result<Table> {
        self.trim()?;
        Ok(Table::new(
            self.schema.clone(),
            self.columns.clone(),
            self.data_length,
        ))
    }

    /// Finalize, consuming the builder and moving its storage into the table
    pub fn into_table(mut self) -> Result<Table> {
        self.trim()?;
        Ok(Table::new(self.schema, self.columns, self.data_length))
    }

    fn trim(&mut self) -> Result<()> {
        if self.state == BuildState::Finalized {
            return Err(TableError::AlreadyFinalized);
        }

        for column in &mut self.columns {
            column.truncate(self.data_length);
        }

        debug!(
            rows = self.data_length,
            released = self.allocated_length - self.data_length,
            "finalized table"
        );

        self.allocated_length = self.data_length;
        self.state = BuildState::Finalized;
        Ok(())
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_finalized(&self) -> bool {
        self.state == BuildState::Finalized
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Number of rows appended so far
    pub fn row_count(&self) -> usize {
        self.data_length
    }

    /// Slots allocated in every column
    pub fn capacity(&self) -> usize {
        self.allocated_length
    }

    /// Kind of the column at `index`
    pub fn kind(&self, index: usize) -> Result<ColumnKind> {
        self.schema.kind(index).ok_or(TableError::ColumnOutOfRange {
            index,
            count: self.schema.len(),
        })
    }

    /// Read a populated cell, before or after finalize
    pub fn get<'a>(&self, column: impl Into<ColumnRef<'a>>, row: usize) -> Result<CellValue> {
        let index = self.schema.resolve(column.into())?;
        if row >= self.data_length {
            return Err(TableError::RowOutOfRange {
                index: row,
                len: self.data_length,
            });
        }

        self.columns
            .get(index)
            .and_then(|c| c.get(row))
            .ok_or(TableError::RowOutOfRange {
                index: row,
                len: self.data_length,
            })
    }
}
