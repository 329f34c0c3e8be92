//! Error types for table building and transcription

use thiserror::Error;

use crate::model::ColumnKind;

/// Errors produced while building or reading a table.
///
/// None of these leave a builder in a corrupted state: a failed append
/// changes neither the row count nor any stored cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("invalid schema: {0}")]
    Schema(String),

    #[error("type mismatch in column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: ColumnKind,
        found: ColumnKind,
    },

    #[error("row has {found} values but the table has {expected} columns")]
    RowArity { expected: usize, found: usize },

    #[error("table builder is finalized; rows can no longer be appended")]
    Finalized,

    #[error("table builder was already finalized")]
    AlreadyFinalized,

    #[error("row index {index} out of range for {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column index {index} out of range for {count} columns")]
    ColumnOutOfRange { index: usize, count: usize },

    #[error("no column named '{0}'")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, TableError>;

/// Errors produced by the audio and inference collaborators.
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("model file not found: {path}")]
    ModelNotFound { path: std::path::PathBuf },

    #[error("inference error: {0}")]
    Inference(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Table(#[from] TableError),
}
