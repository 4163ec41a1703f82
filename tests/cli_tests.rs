//! Command-line tests for the surface-diff binary
//!
//! These tests run the compiled binary against temporary workspaces and check
//! exit codes and the files left behind.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

fn surface_diff(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_surface-diff"))
        .args(args)
        .arg("--workspace")
        .arg(workspace)
        .current_dir(workspace)
        .env_remove("RUST_LOG")
        .output()
        .expect("run surface-diff binary")
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// ============================================================================
// Diff Command
// ============================================================================

#[test]
fn test_unknown_platform_exits_3_without_writing() {
    let tmp = TempDir::new().unwrap();

    let output = surface_diff(tmp.path(), &["diff", "windows"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("windows"), "stderr: {stderr}");
    assert!(entries(tmp.path()).is_empty());
}

#[test]
fn test_missing_platform_exits_3() {
    let tmp = TempDir::new().unwrap();

    let output = surface_diff(tmp.path(), &["diff"]);

    assert_eq!(output.status.code(), Some(3));
    assert!(entries(tmp.path()).is_empty());
}

#[test]
fn test_diff_one_platform_exits_0() {
    let tmp = TempDir::new().unwrap();

    let output = surface_diff(tmp.path(), &["--quiet", "diff", "ios"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(entries(&tmp.path().join("reports")), vec!["ios"]);
    assert_eq!(
        entries(&tmp.path().join("reports/ios")),
        vec!["diff-summary.json", "diff-summary.md"]
    );
}

#[test]
fn test_diff_prints_summary_lines() {
    let tmp = TempDir::new().unwrap();

    let output = surface_diff(tmp.path(), &["diff", "all"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ios: stable (score 0)"), "stdout: {stdout}");
    assert!(stdout.contains("android: stable (score 0)"), "stdout: {stdout}");
    assert!(stdout.contains("Aggregate diff score: 0"), "stdout: {stdout}");
}
