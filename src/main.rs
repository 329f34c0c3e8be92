//! whisperframe - Turn recognizer output into text or per-token tables

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use whisperframe::audio::{load_wav, CaptureBuffer};
use whisperframe::config::{Config, OutputFormat, TranscribeParams};
use whisperframe::inference::ScriptedRecognizer;
use whisperframe::output::render_to_stdout;
use whisperframe::Transcriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Turn speech recognizer output into plain text or a per-token table
#[derive(Parser, Debug)]
#[command(name = "whisperframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recorded transcript (JSON array of segments) replayed by the recognizer
    transcript: PathBuf,

    /// Mono 16 kHz WAV file to feed the recognizer
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Fixed capture length in seconds
    #[arg(long)]
    seconds: Option<f64>,

    /// Emit one row per token instead of plain text
    #[arg(short, long)]
    detailed: bool,

    /// Output format for detailed tables
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Recognizer worker threads
    #[arg(long, default_value_t = 4)]
    threads: u32,

    /// Spoken language code
    #[arg(long, default_value = "en")]
    language: String,

    /// Translate into English
    #[arg(long)]
    translate: bool,

    /// Detect the spoken language
    #[arg(long)]
    detect_language: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "whisperframe=debug"
    } else {
        "whisperframe=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let params = TranscribeParams::default()
        .with_threads(cli.threads)
        .with_language(cli.language)
        .with_translate(cli.translate)
        .with_detect_language(cli.detect_language);

    let mut config = Config::new(cli.transcript)
        .with_params(params)
        .with_detailed(cli.detailed)
        .with_output_format(cli.format.into())
        .with_verbose(cli.verbose);
    if let Some(audio) = cli.audio {
        config = config.with_audio_file(audio);
    }
    if let Some(seconds) = cli.seconds {
        config = config.with_duration(seconds);
    }

    init_tracing(config.verbose);

    let buffer = match config.audio_file {
        Some(ref path) => load_wav(path, config.duration_secs)
            .with_context(|| format!("Failed to load audio: {}", path.display()))?,
        None => CaptureBuffer::with_duration(config.duration_secs.unwrap_or(0.0))
            .context("Invalid capture length")?,
    };
    info!(
        samples = buffer.len(),
        seconds = buffer.duration_secs(),
        "audio ready"
    );

    let recognizer = ScriptedRecognizer::from_path(&config.transcript_file).with_context(|| {
        format!(
            "Failed to load transcript: {}",
            config.transcript_file.display()
        )
    })?;
    let mut transcriber = Transcriber::new(recognizer, config.params.clone());

    if config.detailed {
        let table = transcriber
            .detailed(buffer.samples())
            .context("Failed to build detailed transcript")?;
        render_to_stdout(&table, config.output_format)?;
    } else {
        let text = transcriber
            .text(buffer.samples())
            .context("Failed to transcribe")?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
    }

    Ok(())
}
