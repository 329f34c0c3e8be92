//! Cell values

use std::borrow::Cow;

use serde::Serialize;

use super::schema::ColumnKind;

/// A single cell, tagged with its runtime kind
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Float64(f64),
    Int32(i32),
    Bool(bool),
    Text(String),
    Any(serde_json::Value),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Float64(a), CellValue::Float64(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::Int32(a), CellValue::Int32(b)) => a == b,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Any(a), CellValue::Any(b)) => a == b,
            _ => false,
        }
    }
}

impl CellValue {
    /// Kind this value can be stored under
    pub fn kind(&self) -> ColumnKind {
        match self {
            CellValue::Float64(_) => ColumnKind::Float64,
            CellValue::Int32(_) => ColumnKind::Int32,
            CellValue::Bool(_) => ColumnKind::Bool,
            CellValue::Text(_) => ColumnKind::Text,
            CellValue::Any(_) => ColumnKind::Any,
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Float64(f) => Cow::Owned(f.to_string()),
            CellValue::Int32(i) => Cow::Owned(i.to_string()),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Any(v) => Cow::Owned(v.to_string()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float64(f)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int32(i)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(v: serde_json::Value) -> Self {
        CellValue::Any(v)
    }
}
