//! Homogeneous column storage

use super::schema::ColumnKind;
use super::value::CellValue;

/// Cells of a single column, stored as one typed vector.
///
/// The vector length is the column's allocated length; slots past the
/// owning table's row count hold the kind's zero value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float64(Vec<f64>),
    Int32(Vec<i32>),
    Bool(Vec<bool>),
    Text(Vec<String>),
    Any(Vec<serde_json::Value>),
}

impl ColumnData {
    /// Allocate `len` zero/empty slots of `kind`
    pub fn zeroed(kind: ColumnKind, len: usize) -> Self {
        let mut column = match kind {
            ColumnKind::Float64 => ColumnData::Float64(Vec::with_capacity(len)),
            ColumnKind::Int32 => ColumnData::Int32(Vec::with_capacity(len)),
            ColumnKind::Bool => ColumnData::Bool(Vec::with_capacity(len)),
            ColumnKind::Text => ColumnData::Text(Vec::with_capacity(len)),
            ColumnKind::Any => ColumnData::Any(Vec::with_capacity(len)),
        };
        column.resize(len);
        column
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Float64(_) => ColumnKind::Float64,
            ColumnData::Int32(_) => ColumnKind::Int32,
            ColumnData::Bool(_) => ColumnKind::Bool,
            ColumnData::Text(_) => ColumnKind::Text,
            ColumnData::Any(_) => ColumnKind::Any,
        }
    }

    /// Number of allocated slots
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float64(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Any(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grow or shrink to `len` slots, padding new slots with the kind's
    /// zero value: 0, false, "" or null.
    pub(crate) fn resize(&mut self, len: usize) {
        match self {
            ColumnData::Float64(v) => v.resize(len, 0.0),
            ColumnData::Int32(v) => v.resize(len, 0),
            ColumnData::Bool(v) => v.resize(len, false),
            ColumnData::Text(v) => v.resize(len, String::new()),
            ColumnData::Any(v) => v.resize(len, serde_json::Value::Null),
        }
    }

    /// Drop the unused tail and release its capacity
    pub(crate) fn truncate(&mut self, len: usize) {
        match self {
            ColumnData::Float64(v) => {
                v.truncate(len);
                v.shrink_to_fit();
            }
            ColumnData::Int32(v) => {
                v.truncate(len);
                v.shrink_to_fit();
            }
            ColumnData::Bool(v) => {
                v.truncate(len);
                v.shrink_to_fit();
            }
            ColumnData::Text(v) => {
                v.truncate(len);
                v.shrink_to_fit();
            }
            ColumnData::Any(v) => {
                v.truncate(len);
                v.shrink_to_fit();
            }
        }
    }

    /// Store `value` at `index`.
    ///
    /// Returns the value back if its kind does not match the column or the
    /// slot is not allocated; the column is untouched in that case.
    pub(crate) fn set(&mut self, index: usize, value: CellValue) -> Result<(), CellValue> {
        match (self, value) {
            (ColumnData::Float64(v), CellValue::Float64(x)) if index < v.len() => v[index] = x,
            (ColumnData::Int32(v), CellValue::Int32(x)) if index < v.len() => v[index] = x,
            (ColumnData::Bool(v), CellValue::Bool(x)) if index < v.len() => v[index] = x,
            (ColumnData::Text(v), CellValue::Text(x)) if index < v.len() => v[index] = x,
            (ColumnData::Any(v), CellValue::Any(x)) if index < v.len() => v[index] = x,
            (_, value) => return Err(value),
        }
        Ok(())
    }

    /// Read the cell at `index`, if allocated
    pub fn get(&self, index: usize) -> Option<CellValue> {
        match self {
            ColumnData::Float64(v) => v.get(index).map(|x| CellValue::Float64(*x)),
            ColumnData::Int32(v) => v.get(index).map(|x| CellValue::Int32(*x)),
            ColumnData::Bool(v) => v.get(index).map(|x| CellValue::Bool(*x)),
            ColumnData::Text(v) => v.get(index).map(|x| CellValue::Text(x.clone())),
            ColumnData::Any(v) => v.get(index).map(|x| CellValue::Any(x.clone())),
        }
    }

    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Float64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<&[i32]> {
        match self {
            ColumnData::Int32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<&[bool]> {
        match self {
            ColumnData::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&[String]> {
        match self {
            ColumnData::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_any(&self) -> Option<&[serde_json::Value]> {
        match self {
            ColumnData::Any(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_preserves_and_pads() {
        let mut col = ColumnData::zeroed(ColumnKind::Text, 2);
        col.set(0, CellValue::from("a")).unwrap();
        col.set(1, CellValue::from("b")).unwrap();

        col.resize(4);

        assert_eq!(
            col.as_text().unwrap(),
            &["a".to_string(), "b".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_zeroed_slots_hold_zero_values() {
        let expected = [
            (ColumnKind::Float64, CellValue::Float64(0.0)),
            (ColumnKind::Int32, CellValue::Int32(0)),
            (ColumnKind::Bool, CellValue::Bool(false)),
            (ColumnKind::Text, CellValue::Text(String::new())),
            (ColumnKind::Any, CellValue::Any(serde_json::Value::Null)),
        ];

        for (kind, zero) in expected {
            let mut col = ColumnData::zeroed(kind, 2);
            assert_eq!(col.kind(), kind);
            assert_eq!(col.len(), 2);
            assert_eq!(col.get(1), Some(zero.clone()));

            col.resize(5);
            assert_eq!(col.get(4), Some(zero));
        }
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut col = ColumnData::zeroed(ColumnKind::Float64, 2);

        let rejected = col.set(0, CellValue::from("oops"));

        assert_eq!(rejected, Err(CellValue::from("oops")));
        assert_eq!(col.as_f64().unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut col = ColumnData::zeroed(ColumnKind::Int32, 1);
        assert!(col.set(1, CellValue::Int32(3)).is_err());
    }

    #[test]
    fn test_truncate() {
        let mut col = ColumnData::zeroed(ColumnKind::Bool, 8);
        col.set(2, CellValue::Bool(true)).unwrap();

        col.truncate(3);

        assert_eq!(col.as_bool().unwrap(), &[false, false, true]);
    }
}
