// SPDX-FileCopyrightText: 2026 txflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the compiled `txflow` binary.
//!
//! Each test writes its own config into a temp dir and passes it with
//! `--config`, so runs are isolated from the host's config files.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const FAST_CONFIG: &str = r#"
[app]
log_level = "warn"

[retry]
max_attempts = 3
backoff_ms = 1

[validation]
min_latency_ms = 0
max_latency_ms = 0
success_rate = 1.0
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn txflow(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_txflow"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn txflow")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---- commission ----

#[test]
fn test_commission_command_prints_quote() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "txflow.toml", FAST_CONFIG);

    let output = txflow(
        dir.path(),
        &["--config", config.to_str().unwrap(), "commission", "eur", "200"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "currency=EUR amount=200.00 strategy=eur rate=0.01 commission=2.00\n"
    );
}

// ---- config ----

#[test]
fn test_config_command_prints_effective_toml() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "custom.toml",
        "[pipeline]\namount_threshold = 10.0\n",
    );

    let output = txflow(dir.path(), &["--config", config.to_str().unwrap(), "config"]);

    assert!(output.status.success());
    let printed = stdout(&output);
    assert!(printed.contains("amount_threshold = 10.0"));
    assert!(printed.contains("max_attempts = 3"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "bad.toml", "[retry]\nmax_attemps = 3\n");

    let output = txflow(dir.path(), &["--config", config.to_str().unwrap(), "config"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_attemps"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = txflow(dir.path(), &["--config", "nope.toml", "config"]);
    assert_eq!(output.status.code(), Some(1));
}

// ---- run ----

#[test]
fn test_run_csv_input_as_json() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "txflow.toml", FAST_CONFIG);
    let input = write(
        &dir,
        "batch.csv",
        "id,amount,currency,status\n\
         a,120,USD,NEW\n\
         b,,EUR,\n\
         c,-1,USD,NEW\n\
         d,60,gbp,NEW\n\
         e,50,EUR,NEW\n",
    );

    let output = txflow(
        dir.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "run",
            "--input",
            input.to_str().unwrap(),
            "--json",
        ],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["received"], 5);
    assert_eq!(report["skipped"].as_array().unwrap().len(), 2);

    let processed: Vec<&str> = report["processed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(processed, vec!["a", "d"]);
    assert_eq!(report["processed"][0]["status"], "PROCESSED");
    assert_eq!(report["total_processed_amount"], 180.0);
    assert_eq!(report["commissions"][1]["strategy"], "default");
    assert_eq!(report["validations"][1]["outcome"], "valid");
}

#[test]
fn test_run_sample_batch_as_text() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "txflow.toml", FAST_CONFIG);

    let output = txflow(
        dir.path(),
        &["--config", config.to_str().unwrap(), "run", "--seed", "42"],
    );

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("received 6 transactions, skipped 2, processed 3\n"));
    assert!(text.contains("total processed amount: 395.50"));
    assert_eq!(text.matches(" - VALID (").count(), 3);
}

#[test]
fn test_run_missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "txflow.toml", FAST_CONFIG);

    let output = txflow(
        dir.path(),
        &["--config", config.to_str().unwrap(), "run", "--input", "missing.csv"],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read transactions"));
}
