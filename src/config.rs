//! Configuration handling for whisperframe

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::TranscribeError;

/// Output format for rendered tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Parameters handed to the speech recognizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscribeParams {
    /// Worker threads the engine may use
    pub n_threads: u32,
    /// Translate into English instead of transcribing
    pub translate: bool,
    /// Spoken language code, e.g. "en"
    pub language: String,
    /// Detect the language instead of trusting `language`
    pub detect_language: bool,
    pub suppress_blank: bool,
    pub suppress_non_speech_tokens: bool,
}

impl Default for TranscribeParams {
    fn default() -> Self {
        Self {
            n_threads: 4,
            translate: false,
            language: "en".to_string(),
            detect_language: false,
            suppress_blank: true,
            suppress_non_speech_tokens: true,
        }
    }
}

impl TranscribeParams {
    /// Set the number of worker threads
    pub fn with_threads(mut self, n_threads: u32) -> Self {
        self.n_threads = n_threads;
        self
    }

    /// Enable translation to English
    pub fn with_translate(mut self, translate: bool) -> Self {
        self.translate = translate;
        self
    }

    /// Set the spoken language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable language detection
    pub fn with_detect_language(mut self, detect: bool) -> Self {
        self.detect_language = detect;
        self
    }

    /// Reject parameter combinations no engine can honor
    pub fn validate(&self) -> Result<(), TranscribeError> {
        if self.n_threads == 0 {
            return Err(TranscribeError::Inference(
                "n_threads must be at least 1".to_string(),
            ));
        }
        if self.language.is_empty() && !self.detect_language {
            return Err(TranscribeError::Inference(
                "a language is required unless detection is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for a transcription run
#[derive(Debug, Clone)]
pub struct Config {
    /// Recorded transcript replayed by the recognizer
    pub transcript_file: PathBuf,
    /// Optional mono 16 kHz WAV input
    pub audio_file: Option<PathBuf>,
    /// Fixed capture length in seconds; defaults to the whole WAV file
    pub duration_secs: Option<f64>,
    /// Recognizer parameters
    pub params: TranscribeParams,
    /// Emit one row per token instead of plain text
    pub detailed: bool,
    /// Output format for detailed tables
    pub output_format: OutputFormat,
    /// Verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transcript_file: PathBuf::new(),
            audio_file: None,
            duration_secs: None,
            params: TranscribeParams::default(),
            detailed: false,
            output_format: OutputFormat::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Create a new Config for a transcript file
    pub fn new(transcript_file: PathBuf) -> Self {
        Self {
            transcript_file,
            ..Default::default()
        }
    }

    /// Set the audio input
    pub fn with_audio_file(mut self, path: PathBuf) -> Self {
        self.audio_file = Some(path);
        self
    }

    /// Set the capture duration
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    /// Set recognizer parameters
    pub fn with_params(mut self, params: TranscribeParams) -> Self {
        self.params = params;
        self
    }

    /// Enable detailed (per-token) output
    pub fn with_detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable verbose logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
