//! CLI integration tests for lockorder
//!
//! Runs the binary end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn lockorder_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lockorder").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_run_prints_all_trace_lines() {
    let assert = lockorder_cmd().assert().success().code(0);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6, "unexpected stdout: {}", stdout);
    for worker in ["T1", "T2"] {
        for suffix in ["acquired first", "trying to acquire second", "concluded"] {
            let expected = format!("{} {}", worker, suffix);
            assert_eq!(
                lines.iter().filter(|l| **l == expected).count(),
                1,
                "expected exactly one '{}' in: {}",
                expected,
                stdout
            );
        }
    }
}

#[test]
fn test_run_orders_lines_per_worker() {
    let assert = lockorder_cmd().assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    for worker in ["T1", "T2"] {
        let at = |suffix: &str| {
            let expected = format!("{} {}", worker, suffix);
            lines.iter().position(|l| *l == expected).unwrap()
        };
        assert!(at("acquired first") < at("trying to acquire second"));
        assert!(at("trying to acquire second") < at("concluded"));
    }
}

#[test]
fn test_logs_stay_off_stdout() {
    lockorder_cmd()
        .env("RUST_LOG", "lockorder=debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO").not())
        .stderr(predicate::str::contains("Ordered acquisition concluded"));
}

#[test]
fn test_ignores_arguments_and_still_runs() {
    let assert = lockorder_cmd()
        .args(["extra", "--workers", "3"])
        .assert()
        .success()
        .code(0)
        .stderr(predicate::str::contains("Ignoring command-line arguments"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 6, "unexpected stdout: {}", stdout);
    assert!(lines.contains(&"T1 concluded"));
    assert!(lines.contains(&"T2 concluded"));
}

#[test]
fn test_version() {
    lockorder_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lockorder 0.1.0"));
}

#[test]
fn test_help() {
    lockorder_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("canonical lock ordering"));
}
