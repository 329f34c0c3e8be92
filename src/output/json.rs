//! JSON output format

use std::io::Write;

use anyhow::Result;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::model::{CellValue, Table};

use super::TableFormatter;

/// JSON output formatter: an array of records keyed by column name
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// One row, serialized with keys in column order
struct JsonRecord<'a> {
    names: &'a [&'a str],
    cells: Vec<CellValue>,
}

impl Serialize for JsonRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.names.len()))?;
        for (name, cell) in self.names.iter().zip(&self.cells) {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

struct JsonRecords<'a>(&'a Table);

impl Serialize for JsonRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<&str> = self.0.column_names().collect();
        let mut seq = serializer.serialize_seq(Some(self.0.row_count()))?;
        for cells in self.0.rows() {
            seq.serialize_element(&JsonRecord {
                names: &names,
                cells,
            })?;
        }
        seq.end()
    }
}

impl TableFormatter for JsonOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let records = JsonRecords(table);

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &records)?;
        } else {
            serde_json::to_writer(&mut *writer, &records)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
