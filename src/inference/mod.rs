//! Speech recognizer abstraction.
//!
//! The `SpeechRecognizer` trait decouples transcript assembly from any
//! specific engine. A recognizer turns a mono 16 kHz waveform into a
//! sequence of segments, each carrying its tokens with ids and
//! probabilities. Tables are built from that output, never from engine
//! internals.

pub mod scripted;

pub use scripted::ScriptedRecognizer;

use serde::{Deserialize, Serialize};

use crate::config::TranscribeParams;
use crate::error::TranscribeError;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// A contiguous span of recognized speech.
///
/// `start` and `end` are engine ticks of 10 ms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: i32,
    pub end: i32,
    #[serde(default)]
    pub lang_id: i32,
    /// Segment text exactly as produced, including leading whitespace
    pub text: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// Smallest recognized unit within a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: i32,
    pub text: String,
    /// Model confidence in [0.0, 1.0]
    pub prob: f64,
}

/// Contract for speech recognition backends.
///
/// `&mut self` lets implementations keep decoder state between calls.
pub trait SpeechRecognizer: Send {
    /// Transcribe mono f32 samples at [`SAMPLE_RATE`].
    ///
    /// # Errors
    /// Returns an error if the engine fails to process the audio.
    ///
    /// [`SAMPLE_RATE`]: crate::audio::SAMPLE_RATE
    fn transcribe(&mut self, samples: &[f32], params: &TranscribeParams) -> Result<Vec<Segment>>;
}
