use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const TRANSCRIPT: &str = r#"[
  {"start": 0, "end": 120, "lang_id": 0, "text": "hello ",
   "tokens": [{"id": 31373, "text": "hel", "prob": 0.91},
              {"id": 220, "text": "lo", "prob": 0.42}]},
  {"start": 120, "end": 240, "lang_id": 0, "text": "world",
   "tokens": [{"id": 6894, "text": "world", "prob": 0.88}]}
]"#;

fn transcript_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TRANSCRIPT.as_bytes()).unwrap();
    file
}

#[test]
fn plain_text_is_exact_concatenation() {
    let file = transcript_file();

    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn detailed_csv_has_one_row_per_token() {
    let file = transcript_file();

    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .args(["--detailed", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            "lang_id,segment_idx,start,end,token_idx,token_id,token,prob\n\
             0,0,0,120,0,31373,hel,0.91\n\
             0,0,0,120,1,220,lo,0.42\n\
             0,1,120,240,0,6894,world,0.88\n",
        );
}

#[test]
fn detailed_json_records() {
    let file = transcript_file();

    let output = Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .args(["-d", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["segment_idx"], 1);
    assert_eq!(records[2]["token"], "world");
}

#[test]
fn detailed_terminal_table() {
    let file = transcript_file();

    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .arg("--detailed")
        .assert()
        .success()
        .stdout(predicate::str::contains("token_idx"))
        .stdout(predicate::str::contains("3 rows × 8 columns"));
}

#[test]
fn missing_transcript_fails() {
    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg("/no/such/transcript.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load transcript"));
}

#[test]
fn invalid_threads_fail() {
    let file = transcript_file();

    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .args(["--threads", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("n_threads"));
}

#[test]
fn infinite_capture_length_fails() {
    let file = transcript_file();

    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .args(["--seconds", "inf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid capture length"));
}

#[test]
fn audio_file_is_loaded() {
    let file = transcript_file();
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("silence.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&wav, spec).unwrap();
    for _ in 0..1600 {
        writer.write_sample(0.0f32).unwrap();
    }
    writer.finalize().unwrap();

    Command::cargo_bin("whisperframe")
        .unwrap()
        .arg(file.path())
        .arg("--audio")
        .arg(&wav)
        .args(["--seconds", "0.5"])
        .assert()
        .success()
        .stdout("hello world\n");
}
