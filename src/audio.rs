//! Fixed-length capture buffer for mono 16 kHz audio

use std::path::Path;

use tracing::{debug, trace};

use crate::error::TranscribeError;

/// Sample rate every recognizer expects
pub const SAMPLE_RATE: u32 = 16_000;

/// Longest fixed capture accepted, in seconds (one hour)
pub const MAX_CAPTURE_SECS: f64 = 3600.0;

/// Pre-sized buffer filled by successive frame callbacks.
///
/// Slots never written stay at 0.0. Frames arriving after the buffer is
/// full are dropped.
#[derive(Debug, Clone)]
pub struct CaptureBuffer {
    samples: Vec<f32>,
    cursor: usize,
}

impl CaptureBuffer {
    /// Buffer of `len` zeroed samples
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
            cursor: 0,
        }
    }

    /// Buffer holding `secs` seconds at [`SAMPLE_RATE`].
    ///
    /// `secs` must be finite and within `0..=MAX_CAPTURE_SECS`.
    pub fn with_duration(secs: f64) -> Result<Self, TranscribeError> {
        if !secs.is_finite() || !(0.0..=MAX_CAPTURE_SECS).contains(&secs) {
            return Err(TranscribeError::Audio(format!(
                "capture length must be between 0 and {} seconds, got {}",
                MAX_CAPTURE_SECS, secs
            )));
        }
        let len = (secs * SAMPLE_RATE as f64) as usize;
        Ok(Self::new(len))
    }

    /// Copy a block of frames at the cursor.
    ///
    /// Returns how many frames were stored. The cursor advances by the full
    /// frame count even when part of the block did not fit.
    pub fn push_frames(&mut self, frames: &[f32]) -> usize {
        let start = self.cursor.min(self.samples.len());
        let stored = frames.len().min(self.samples.len() - start);

        self.samples[start..start + stored].copy_from_slice(&frames[..stored]);
        self.cursor = self.cursor.saturating_add(frames.len());

        if stored < frames.len() {
            trace!(dropped = frames.len() - stored, "capture buffer full");
        }
        stored
    }

    /// Frames offered so far, including dropped ones
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_full(&self) -> bool {
        self.cursor >= self.samples.len()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

/// Read a mono 16 kHz WAV file into a capture buffer.
///
/// With `duration` the buffer has that fixed length (truncating or zero
/// padding the file); otherwise it is exactly as long as the file.
/// Integer samples are scaled to [-1.0, 1.0].
pub fn load_wav(path: &Path, duration: Option<f64>) -> Result<CaptureBuffer, TranscribeError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 || spec.sample_rate != SAMPLE_RATE {
        return Err(TranscribeError::Audio(format!(
            "{}: expected mono {} Hz audio, found {} channel(s) at {} Hz",
            path.display(),
            SAMPLE_RATE,
            spec.channels,
            spec.sample_rate
        )));
    }

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, hound::Error>>()?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1_i64 << (spec.bits_per_sample.clamp(1, 32) - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, hound::Error>>()?
        }
    };

    let mut buffer = match duration {
        Some(secs) => CaptureBuffer::with_duration(secs)?,
        None => CaptureBuffer::new(samples.len()),
    };
    buffer.push_frames(&samples);

    debug!(
        path = %path.display(),
        read = samples.len(),
        kept = buffer.len().min(samples.len()),
        "loaded WAV audio"
    );

    Ok(buffer)
}
