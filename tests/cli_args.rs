//! Tests for the binary's command line behaviour.

mod common;

use common::temp_config;
use std::io::Write;
use std::process::{Command, Stdio};

fn jokerate_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jokerate"))
}

#[test]
fn test_help_shows_options() {
    let output = jokerate_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--batch"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = jokerate_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--batch")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_batch_reads_stdin() {
    let (_dir, path) = temp_config("[[jokes]]\ntext = \"seed\"\nrating = -5\n");
    let mut child = jokerate_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--batch")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"down 1\nadd hello\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(
        json,
        serde_json::json!([{ "id": 1, "text": "hello", "rating": 0 }])
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[info] Joke deleted for being too cold"));
    assert!(stderr.contains("[success] Joke added successfully!"));
}
