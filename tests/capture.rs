//! End-to-end replay tests in capture mode — no serial hardware needed.
//!
//! `UART_REPLAY_CAPTURE` points the binary at a cassette file instead of a
//! device; each test then reads the cassette back to see what was sent.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use base64::Engine;
use predicates::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Cassette {
    device: String,
    baud_rate: u32,
    frames: Vec<CapturedFrame>,
}

#[derive(Debug, Deserialize)]
struct CapturedFrame {
    seq: u64,
    source: String,
    line: usize,
    data: String,
}

impl CapturedFrame {
    fn bytes(&self) -> Vec<u8> {
        base64::engine::general_purpose::STANDARD.decode(&self.data).unwrap()
    }
}

/// Fresh working directory holding the two input files.
fn workspace(name: &str, ascii: &str, hex: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("uart_replay_capture_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("ascii_data.txt"), ascii).unwrap();
    std::fs::write(dir.join("bytes_data.txt"), hex).unwrap();
    dir
}

fn cmd(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("uart-replay").unwrap();
    cmd.current_dir(work_dir)
        .env("UART_REPLAY_CAPTURE", work_dir.join("run.cassette.yaml"))
        .env("UART_REPLAY_CONFIG", "/nonexistent/uart-replay/config.toml")
        .env_remove("UART_REPLAY_REC")
        .env_remove("UART_REPLAY_DEVICE")
        .env_remove("RUST_LOG");
    cmd
}

fn load_cassette(work_dir: &Path) -> Cassette {
    let content = std::fs::read_to_string(work_dir.join("run.cassette.yaml")).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

#[test]
fn replays_ascii_then_hex_in_file_order() {
    let dir = workspace("happy", "PING\nHELLO WORLD\n", "01 02 03\nFF\n");

    cmd(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Capture saved:"))
        .stderr(predicate::str::contains("Sent 4 frames (19 bytes)"));

    let cassette = load_cassette(&dir);
    assert_eq!(cassette.device, "/dev/ttyUSB1");
    assert_eq!(cassette.baud_rate, 9600);
    let payloads: Vec<Vec<u8>> = cassette.frames.iter().map(CapturedFrame::bytes).collect();
    assert_eq!(
        payloads,
        vec![b"PING".to_vec(), b"HELLO WORLD".to_vec(), vec![0x01, 0x02, 0x03], vec![0xFF]]
    );
    let seqs: Vec<u64> = cassette.frames.iter().map(|f| f.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3]);
    assert_eq!(cassette.frames[0].source, "ascii_data.txt");
    assert_eq!(cassette.frames[2].source, "bytes_data.txt");
    assert_eq!(cassette.frames[3].line, 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_ascii_line_is_sent_as_empty_frame() {
    let dir = workspace("empty_line", "A\n\nB\n", "DE AD BE EF\n");

    cmd(&dir).assert().success();

    let cassette = load_cassette(&dir);
    assert_eq!(cassette.frames.len(), 4);
    assert!(cassette.frames[1].bytes().is_empty());
    assert_eq!(cassette.frames[3].bytes(), vec![0xDE, 0xAD, 0xBE, 0xEF]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_hex_token_stops_the_run() {
    let dir = workspace("bad_hex", "PING\n", "01 02\n01 ZZ\n03\n");

    cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error in bytes_data.txt at line 2"))
        .stderr(predicate::str::contains("ZZ"));

    // Frames before the bad line were already sent and stay in the capture
    let cassette = load_cassette(&dir);
    let payloads: Vec<Vec<u8>> = cassette.frames.iter().map(CapturedFrame::bytes).collect();
    assert_eq!(payloads, vec![b"PING".to_vec(), vec![0x01, 0x02]]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn out_of_range_hex_token_stops_the_run() {
    let dir = workspace("out_of_range", "", "100\n");

    cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds FF"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_hex_file_fails_after_ascii_sent() {
    let dir = workspace("missing_hex", "PING\n", "");
    std::fs::remove_file(dir.join("bytes_data.txt")).unwrap();

    cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open input file bytes_data.txt"));

    let cassette = load_cassette(&dir);
    assert_eq!(cassette.frames.len(), 1);
    assert_eq!(cassette.frames[0].bytes(), b"PING");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn file_flags_and_config_are_honoured() {
    let dir = workspace("flags", "unused\n", "unused\n");
    std::fs::write(dir.join("messages.txt"), "AT\n").unwrap();
    std::fs::write(dir.join("frames.txt"), "7E 01\n").unwrap();
    let config = dir.join("config.toml");
    std::fs::write(&config, "[serial]\ndevice = \"/dev/ttyACM7\"\nbaud_rate = 115200\n").unwrap();

    cmd(&dir)
        .env("UART_REPLAY_CONFIG", &config)
        .args(["-a", "messages.txt", "-x", "frames.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sent 2 frames (4 bytes)"));

    let cassette = load_cassette(&dir);
    assert_eq!(cassette.device, "/dev/ttyACM7");
    assert_eq!(cassette.baud_rate, 115_200);
    assert_eq!(cassette.frames[0].source, "messages.txt");
    assert_eq!(cassette.frames[1].bytes(), vec![0x7E, 0x01]);

    let _ = std::fs::remove_dir_all(&dir);
}
