//! Assembling recognizer output into text or per-token tables

use tracing::debug;

use crate::config::TranscribeParams;
use crate::error::{Result as TableResult, TranscribeError};
use crate::inference::{Segment, SpeechRecognizer};
use crate::model::{CellValue, ColumnKind, Record, Schema, Table, TableBuilder};

/// Column layout of the detailed (per-token) output
pub const DETAILED_COLUMNS: [(&str, ColumnKind); 8] = [
    ("lang_id", ColumnKind::Int32),
    ("segment_idx", ColumnKind::Int32),
    ("start", ColumnKind::Int32),
    ("end", ColumnKind::Int32),
    ("token_idx", ColumnKind::Int32),
    ("token_id", ColumnKind::Int32),
    ("token", ColumnKind::Text),
    ("prob", ColumnKind::Float64),
];

/// One row of the detailed output
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRow {
    pub lang_id: i32,
    pub segment_idx: i32,
    pub start: i32,
    pub end: i32,
    pub token_idx: i32,
    pub token_id: i32,
    pub token: String,
    pub prob: f64,
}

impl Record for TokenRow {
    fn schema() -> TableResult<Schema> {
        Schema::new(DETAILED_COLUMNS)
    }

    fn into_row(self) -> Vec<CellValue> {
        vec![
            CellValue::Int32(self.lang_id),
            CellValue::Int32(self.segment_idx),
            CellValue::Int32(self.start),
            CellValue::Int32(self.end),
            CellValue::Int32(self.token_idx),
            CellValue::Int32(self.token_id),
            CellValue::Text(self.token),
            CellValue::Float64(self.prob),
        ]
    }
}

/// Concatenate segment texts in order, with nothing inserted between them
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Build the detailed table: one row per token, segment fields repeated
/// across all tokens of a segment.
pub fn detailed_table(segments: &[Segment]) -> TableResult<Table> {
    let mut builder = TableBuilder::for_record::<TokenRow>()?;

    for (segment_idx, segment) in segments.iter().enumerate() {
        for (token_idx, token) in segment.tokens.iter().enumerate() {
            builder.append_record(TokenRow {
                lang_id: segment.lang_id,
                segment_idx: segment_idx as i32,
                start: segment.start,
                end: segment.end,
                token_idx: token_idx as i32,
                token_id: token.id,
                token: token.text.clone(),
                prob: token.prob,
            })?;
        }
    }

    builder.into_table()
}

/// A recognizer bound to a fixed set of parameters
pub struct Transcriber {
    recognizer: Box<dyn SpeechRecognizer>,
    params: TranscribeParams,
}

impl Transcriber {
    pub fn new<R: SpeechRecognizer + 'static>(recognizer: R, params: TranscribeParams) -> Self {
        Self {
            recognizer: Box::new(recognizer),
            params,
        }
    }

    pub fn params(&self) -> &TranscribeParams {
        &self.params
    }

    /// Run the recognizer on `samples`
    pub fn segments(&mut self, samples: &[f32]) -> Result<Vec<Segment>, TranscribeError> {
        self.params.validate()?;
        let segments = self.recognizer.transcribe(samples, &self.params)?;
        debug!(
            samples = samples.len(),
            segments = segments.len(),
            tokens = segments.iter().map(|s| s.tokens.len()).sum::<usize>(),
            "transcribed audio"
        );
        Ok(segments)
    }

    /// Plain-text transcription
    pub fn text(&mut self, samples: &[f32]) -> Result<String, TranscribeError> {
        Ok(plain_text(&self.segments(samples)?))
    }

    /// Detailed per-token transcription
    pub fn detailed(&mut self, samples: &[f32]) -> Result<Table, TranscribeError> {
        Ok(detailed_table(&self.segments(samples)?)?)
    }
}

impl std::fmt::Debug for Transcriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcriber")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{ScriptedRecognizer, Token};

    fn token(id: i32, text: &str, prob: f64) -> Token {
        Token {
            id,
            text: text.to_string(),
            prob,
        }
    }

    fn segment(start: i32, end: i32, text: &str, tokens: Vec<Token>) -> Segment {
        Segment {
            start,
            end,
            lang_id: 0,
            text: text.to_string(),
            tokens,
        }
    }

    #[test]
    fn test_plain_text_exact_concatenation() {
        let segments = vec![
            segment(0, 100, "hello ", vec![]),
            segment(100, 200, "world", vec![]),
        ];
        assert_eq!(plain_text(&segments), "hello world");

        let unspaced = vec![segment(0, 1, " a", vec![]), segment(1, 2, "b ", vec![])];
        assert_eq!(plain_text(&unspaced), " ab ");

        assert_eq!(plain_text(&[]), "");
    }

    #[test]
    fn test_one_segment_three_tokens() {
        let segments = vec![Segment {
            lang_id: 3,
            ..segment(
                50,
                320,
                " Hi there",
                vec![
                    token(50364, "", 0.99),
                    token(2421, " Hi", 0.87),
                    token(456, " there", 0.65),
                ],
            )
        }];

        let table = detailed_table(&segments).unwrap();

        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            DETAILED_COLUMNS.iter().map(|(name, _)| *name).collect::<Vec<_>>()
        );
        for row in 0..3 {
            assert_eq!(table.get("lang_id", row).unwrap(), CellValue::Int32(3));
            assert_eq!(table.get("segment_idx", row).unwrap(), CellValue::Int32(0));
            assert_eq!(table.get("start", row).unwrap(), CellValue::Int32(50));
            assert_eq!(table.get("end", row).unwrap(), CellValue::Int32(320));
        }
        assert_eq!(table.column("token_idx").unwrap().as_i32().unwrap(), &[0, 1, 2]);
        assert_eq!(table.get("token", 2).unwrap(), CellValue::from(" there"));
        assert_eq!(table.get("prob", 1).unwrap(), CellValue::Float64(0.87));
    }

    #[test]
    fn test_many_segments_grow_table() {
        let segments: Vec<Segment> = (0..10)
            .map(|i| {
                segment(
                    i * 100,
                    i * 100 + 90,
                    "x",
                    (0..4).map(|t| token(i * 10 + t, "x", 0.5)).collect(),
                )
            })
            .collect();

        let table = detailed_table(&segments).unwrap();

        assert_eq!(table.row_count(), 40);
        assert_eq!(table.get("segment_idx", 39).unwrap(), CellValue::Int32(9));
        assert_eq!(table.get("token_idx", 39).unwrap(), CellValue::Int32(3));
        assert_eq!(table.get("token_id", 21).unwrap(), CellValue::Int32(51));
    }

    #[test]
    fn test_transcriber_modes() {
        let segments = vec![
            segment(0, 100, " Good", vec![token(1, " Good", 0.9)]),
            segment(100, 180, " morning.", vec![token(2, " morning", 0.8), token(3, ".", 0.7)]),
        ];
        let mut transcriber =
            Transcriber::new(ScriptedRecognizer::new(segments), TranscribeParams::default());

        assert_eq!(transcriber.text(&[0.0; 160]).unwrap(), " Good morning.");
        assert_eq!(transcriber.detailed(&[0.0; 160]).unwrap().row_count(), 3);
    }

    #[test]
    fn test_transcriber_rejects_bad_params() {
        let mut transcriber = Transcriber::new(
            ScriptedRecognizer::default(),
            TranscribeParams::default().with_threads(0),
        );

        assert!(matches!(
            transcriber.text(&[]),
            Err(TranscribeError::Inference(_))
        ));
    }
}
