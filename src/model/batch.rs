//! Conversion to Apache Arrow record batches

use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema as ArrowSchema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use super::column::ColumnData;
use super::schema::ColumnKind;
use super::table::Table;

fn data_type(kind: ColumnKind) -> DataType {
    match kind {
        ColumnKind::Float64 => DataType::Float64,
        ColumnKind::Int32 => DataType::Int32,
        ColumnKind::Bool => DataType::Boolean,
        // Opaque cells travel as JSON text
        ColumnKind::Text | ColumnKind::Any => DataType::Utf8,
    }
}

fn to_array(column: &ColumnData) -> ArrayRef {
    match column {
        ColumnData::Float64(v) => Arc::new(Float64Array::from(v.clone())),
        ColumnData::Int32(v) => Arc::new(Int32Array::from(v.clone())),
        ColumnData::Bool(v) => Arc::new(BooleanArray::from(v.clone())),
        ColumnData::Text(v) => Arc::new(StringArray::from_iter_values(v.iter())),
        ColumnData::Any(v) => {
            Arc::new(StringArray::from_iter_values(v.iter().map(|x| x.to_string())))
        }
    }
}

impl Table {
    /// Copy this table into an Arrow record batch with the same column
    /// names, order and row count.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let fields: Vec<Field> = self
            .schema()
            .iter()
            .map(|(name, kind)| Field::new(name, data_type(kind), false))
            .collect();

        let arrays: Vec<ArrayRef> = self.columns().map(|(_, column)| to_array(column)).collect();

        RecordBatch::try_new(Arc::new(ArrowSchema::new(fields)), arrays)
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::Array;

    use crate::model::{CellValue, TableBuilder};

    use super::*;

    #[test]
    fn test_record_batch_shape() {
        let mut builder = TableBuilder::from_columns([
            ("prob", ColumnKind::Float64),
            ("token", ColumnKind::Text),
            ("extra", ColumnKind::Any),
        ])
        .unwrap();
        for i in 0..12 {
            builder
                .append_row([
                    CellValue::Float64(i as f64 / 12.0),
                    CellValue::from(format!("t{}", i)),
                    CellValue::Any(serde_json::json!({ "i": i })),
                ])
                .unwrap();
        }
        let table = builder.into_table().unwrap();

        let batch = table.to_record_batch().unwrap();

        assert_eq!(batch.num_rows(), 12);
        assert_eq!(batch.num_columns(), 3);
        assert_eq!(batch.schema().field(1).name(), "token");

        let tokens = batch
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(tokens.value(11), "t11");

        let extra = batch
            .column(2)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(extra.value(3), r#"{"i":3}"#);
        assert_eq!(extra.null_count(), 0);
    }
}
