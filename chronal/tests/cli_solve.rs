//! CLI tests for the `chronal` binary.
//!
//! Spawns the binary in a scratch directory and checks stdout and exit codes.

use std::process::Command;

use chronal::exit_codes;
use chronal::io::config::{ChronalConfig, load_config};
use chronal::test_support::{TestDir, tiny_params};

fn chronal(dir: &TestDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chronal"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn solve_prints_puzzle_answers_without_config() {
    let dir = TestDir::new().expect("dir");
    let output = chronal(&dir).arg("solve").output().expect("chronal solve");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout, "Solution 1: 11474091\nSolution 2: 4520776\n");
}

#[test]
fn solve_json_uses_configured_params() {
    let dir = TestDir::new().expect("dir");
    dir.write_config(&ChronalConfig {
        max_iterations: None,
        params: tiny_params(),
    })
    .expect("write config");

    let output = chronal(&dir)
        .args(["solve", "--json"])
        .output()
        .expect("chronal solve --json");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["first_value"], 2);
    assert_eq!(report["last_unique_value"], 14);
    assert_eq!(report["iterations"], 4);
}

#[test]
fn solve_exits_with_bound_code_when_limit_too_small() {
    let dir = TestDir::new().expect("dir");
    dir.write_config(&ChronalConfig {
        max_iterations: Some(3),
        params: tiny_params(),
    })
    .expect("write config");

    let output = chronal(&dir).arg("solve").output().expect("chronal solve");

    assert_eq!(output.status.code(), Some(exit_codes::BOUND_EXCEEDED));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("no repeated value after 3 iterations"));
}

#[test]
fn solve_rejects_invalid_config() {
    let dir = TestDir::new().expect("dir");
    std::fs::write(dir.config_path(), "max_iterations = 0\n").expect("write");

    let status = chronal(&dir).arg("solve").status().expect("chronal solve");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}

#[test]
fn sequence_prints_values_in_order() {
    let dir = TestDir::new().expect("dir");
    dir.write_config(&ChronalConfig {
        max_iterations: None,
        params: tiny_params(),
    })
    .expect("write config");

    let output = chronal(&dir).arg("sequence").output().expect("chronal sequence");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "2\n6\n14\n");
}

#[test]
fn sequence_limit_truncates_output() {
    let dir = TestDir::new().expect("dir");
    let output = chronal(&dir)
        .args(["sequence", "--limit", "3"])
        .output()
        .expect("chronal sequence");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf8"),
        "11474091\n8219978\n9215298\n"
    );
}

#[test]
fn init_writes_default_config_once() {
    let dir = TestDir::new().expect("dir");

    let status = chronal(&dir).arg("init").status().expect("chronal init");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(
        load_config(&dir.config_path()).expect("load"),
        ChronalConfig::default()
    );

    dir.write_config(&ChronalConfig {
        max_iterations: Some(7),
        params: tiny_params(),
    })
    .expect("write config");
    let status = chronal(&dir).arg("init").status().expect("chronal init");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(
        load_config(&dir.config_path())
            .expect("load")
            .max_iterations,
        Some(7)
    );

    let status = chronal(&dir)
        .args(["init", "--force"])
        .status()
        .expect("chronal init --force");
    assert_eq!(status.code(), Some(exit_codes::OK));
    assert_eq!(
        load_config(&dir.config_path()).expect("load"),
        ChronalConfig::default()
    );
}
