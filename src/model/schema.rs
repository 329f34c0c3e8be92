//! Column kinds and table schemas

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Float64,
    Int32,
    Bool,
    Text,
    /// Opaque caller-supplied values (nested or complex cells)
    Any,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Float64 => write!(f, "float64"),
            ColumnKind::Int32 => write!(f, "int32"),
            ColumnKind::Bool => write!(f, "bool"),
            ColumnKind::Text => write!(f, "text"),
            ColumnKind::Any => write!(f, "any"),
        }
    }
}

/// Ordered set of uniquely named, typed columns.
///
/// Insertion order is the output column order of every table built from it.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: IndexMap<String, ColumnKind, FxBuildHasher>,
}

// IndexMap equality ignores order, column order is significant here
impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Schema {}

impl Schema {
    /// Build a schema from `(name, kind)` pairs.
    ///
    /// Fails if there are no columns, a name is empty, or a name repeats.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnKind)>,
        S: Into<String>,
    {
        let mut map: IndexMap<String, ColumnKind, FxBuildHasher> = IndexMap::default();

        for (position, (name, kind)) in columns.into_iter().enumerate() {
            let name = name.into();
            if name.is_empty() {
                return Err(TableError::Schema(format!(
                    "column at position {} has an empty name",
                    position
                )));
            }
            if map.contains_key(&name) {
                return Err(TableError::Schema(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
            map.insert(name, kind);
        }

        if map.is_empty() {
            return Err(TableError::Schema("schema has no columns".to_string()));
        }

        Ok(Self { columns: map })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// A valid schema always has at least one column
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Name of the column at `index`
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get_index(index).map(|(name, _)| name.as_str())
    }

    /// Kind of the column at `index`
    pub fn kind(&self, index: usize) -> Option<ColumnKind> {
        self.columns.get_index(index).map(|(_, kind)| *kind)
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// `(name, kind)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.columns.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Resolve a column reference to a checked index
    pub fn resolve(&self, column: ColumnRef<'_>) -> Result<usize> {
        match column {
            ColumnRef::Index(index) if index < self.len() => Ok(index),
            ColumnRef::Index(index) => Err(TableError::ColumnOutOfRange {
                index,
                count: self.len(),
            }),
            ColumnRef::Name(name) => self
                .index_of(name)
                .ok_or_else(|| TableError::UnknownColumn(name.to_string())),
        }
    }
}

/// Column addressed by position or by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for ColumnRef<'_> {
    fn from(index: usize) -> Self {
        ColumnRef::Index(index)
    }
}

impl<'a> From<&'a str> for ColumnRef<'a> {
    fn from(name: &'a str) -> Self {
        ColumnRef::Name(name)
    }
}
