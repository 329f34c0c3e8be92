//! `ScriptedRecognizer`: replays a recorded transcript instead of running a model.
//!
//! The script is a JSON array of segments in the same shape the recognizer
//! produces, so engine output captured once can be turned into tables any
//! number of times.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::config::TranscribeParams;
use crate::error::TranscribeError;
use crate::inference::{Result, Segment, SpeechRecognizer};

/// Recognizer returning the same segments for every call
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognizer {
    segments: Vec<Segment>,
    calls: u32,
}

impl ScriptedRecognizer {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments, calls: 0 }
    }

    /// Load a script from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TranscribeError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let segments: Vec<Segment> = serde_json::from_reader(reader)?;
        debug!(path = %path.display(), segments = segments.len(), "loaded transcript script");

        Ok(Self::new(segments))
    }

    /// Number of `transcribe` calls served so far
    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn transcribe(&mut self, samples: &[f32], params: &TranscribeParams) -> Result<Vec<Segment>> {
        self.calls += 1;
        debug!(
            call = self.calls,
            samples = samples.len(),
            language = %params.language,
            translate = params.translate,
            "ScriptedRecognizer::transcribe"
        );
        Ok(self.segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_script() {
        let err = ScriptedRecognizer::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TranscribeError::ModelNotFound { .. }));
    }

    #[test]
    fn test_load_and_replay() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"start": 0, "end": 150, "text": " Hi", "tokens": [{{"id": 7, "text": " Hi", "prob": 0.9}}]}}]"#
        )
        .unwrap();

        let mut recognizer = ScriptedRecognizer::from_path(file.path()).unwrap();
        let params = TranscribeParams::default();

        let first = recognizer.transcribe(&[0.0; 16], &params).unwrap();
        let second = recognizer.transcribe(&[], &params).unwrap();

        assert_eq!(first, second);
        assert_eq!(first[0].lang_id, 0);
        assert_eq!(first[0].tokens[0].id, 7);
        assert_eq!(recognizer.calls(), 2);
    }

    #[test]
    fn test_malformed_script() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = ScriptedRecognizer::from_path(file.path()).unwrap_err();
        assert!(matches!(err, TranscribeError::Json(_)));
    }
}
