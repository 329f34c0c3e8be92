//! Box-drawn terminal tables

use std::io::Write;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::model::Table;

use super::TableFormatter;

/// Terminal output
pub struct TerminalOutput {
    show_kinds: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { show_kinds: false }
    }

    /// Annotate headers with column kinds, e.g. `prob (float64)`
    pub fn with_kinds() -> Self {
        Self { show_kinds: true }
    }

    fn headers(&self, table: &Table) -> Vec<String> {
        table
            .schema()
            .iter()
            .map(|(name, kind)| {
                if self.show_kinds {
                    format!("{} ({})", name, kind)
                } else {
                    name.to_string()
                }
            })
            .collect()
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for TerminalOutput {
    fn render(&self, table: &Table, writer: &mut dyn Write) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(self.headers(table));
        for row in table.rows() {
            builder.push_record(row.iter().map(|c| c.display().into_owned()));
        }

        let mut grid = builder.build();
        grid.with(Style::modern());

        writeln!(writer, "{}", grid)?;
        writeln!(
            writer,
            "{} rows × {} columns",
            table.row_count(),
            table.column_count()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, ColumnKind, TableBuilder};

    #[test]
    fn test_render_contains_cells() {
        let mut builder =
            TableBuilder::from_columns([("token", ColumnKind::Text), ("prob", ColumnKind::Float64)])
                .unwrap();
        builder
            .append_row([CellValue::from("hello"), CellValue::Float64(0.25)])
            .unwrap();
        let table = builder.into_table().unwrap();

        let mut out = Vec::new();
        TerminalOutput::with_kinds().render(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("token (text)"));
        assert!(text.contains("hello"));
        assert!(text.contains("0.25"));
        assert!(text.ends_with("1 rows × 2 columns\n"));
    }
}
