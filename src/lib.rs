//! whisperframe - Growable typed-column tables for speech recognition output
//!
//! Rows of per-column-typed values are appended to a [`TableBuilder`]
//! without knowing the final row count. Columns grow together by doubling
//! and are trimmed once when the builder is finalized into an immutable
//! [`Table`]. The [`transcript`] module turns recognizer segments into
//! plain text or a per-token table.

pub mod audio;
pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod output;
pub mod transcript;

pub use config::{Config, TranscribeParams};
pub use error::{TableError, TranscribeError};
pub use inference::{Segment, SpeechRecognizer, Token};
pub use model::{CellValue, ColumnKind, Schema, Table, TableBuilder};
pub use transcript::{detailed_table, plain_text, Transcriber};
