#![allow(unused)]
//! Binary process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `amala` as a compiled binary via
//! [`std::process::Command`], validating what a user or a scheduled job
//! would observe.
//!
//! - **Exit codes**: success = 0; nothing to process = 0; unreadable explicit
//!   config or missing template = non-zero.
//! - **Streams**: logs go to stderr; `--json` prints only the summary on
//!   stdout.
//! - **Flags**: `--workdir`, `--config`, `--debug`, `--json`.
//!
//! # Running
//!
//! ```sh
//! cargo test --test cli_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn amala_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_amala"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_in(ws: &Workspace, extra: &[&str]) -> Output {
    amala_binary()
        .arg("--workdir")
        .arg(ws.path())
        .args(extra)
        .output()
        .expect("spawn amala")
}

#[test]
fn successful_run_exits_zero_and_prints_json() {
    let ws = Workspace::with_template();
    for entry in build_series(4) {
        ws.write_entry(&entry);
    }

    let out = run_in(&ws, &["--json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(summary["outcome"], "completed");
    assert_eq!(summary["parsed"], 4);
    assert!(ws.exists("amala_dataset.csv"));
    assert!(ws.exists("assets/progress_chart.svg"));
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    let ws = Workspace::with_template();
    ws.write_entry(&entry_on("2024-01-01", 1.0));

    let out = run_in(&ws, &[]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
    assert!(String::from_utf8_lossy(&out.stderr).contains("dataset written"));
}

#[test]
fn debug_flag_enables_per_file_events() {
    let ws = Workspace::with_template();
    ws.write_entry(&entry_on("2024-01-01", 1.0));

    let quiet = run_in(&ws, &[]);
    let verbose = run_in(&ws, &["--debug"]);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("parsed entry"));
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("parsed entry"));
}

#[test]
fn nothing_to_process_exits_zero() {
    let ws = Workspace::new();

    let out = run_in(&ws, &["--json"]);
    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["outcome"], "nothing_to_process");
    assert!(!ws.exists("amala_dataset.csv"));
}

#[test]
fn missing_template_exits_nonzero() {
    let ws = Workspace::new();
    ws.write_entry(&entry_on("2024-01-01", 1.0));

    let out = run_in(&ws, &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("index.template.md"));
}

#[test]
fn missing_explicit_config_exits_nonzero() {
    let ws = Workspace::with_template();
    let out = run_in(&ws, &["--config", "does-not-exist.toml"]);
    assert!(!out.status.success());
}

#[test]
fn explicit_config_is_honoured() {
    let ws = Workspace::with_template();
    let cfg = ws.path().join("custom.toml");
    std::fs::write(&cfg, "[paths]\ndataset_file = \"metrics.csv\"\n").unwrap();
    ws.write_entry(&entry_on("2024-01-01", 1.0));

    let out = amala_binary()
        .arg("--workdir")
        .arg(ws.path())
        .arg("--config")
        .arg(&cfg)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(ws.exists("metrics.csv"));
    assert!(!ws.exists("amala_dataset.csv"));
}

#[test]
fn unknown_flag_exits_nonzero() {
    let out = amala_binary().arg("--no-such-flag").output().unwrap();
    assert!(!out.status.success());
}
