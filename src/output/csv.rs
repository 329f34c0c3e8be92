//! CSV output format

use std::io::Write;

use anyhow::Result;

use crate::model::Table;

use super::TableFormatter;

/// CSV output with a header row
pub struct CsvOutput {
    delimiter: u8,
}

impl CsvOutput {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for CsvOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        csv_writer.write_record(table.column_names())?;
        for row in table.rows() {
            csv_writer.write_record(row.iter().map(|c| c.display().into_owned()))?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}
