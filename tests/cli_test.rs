//! End-to-end tests for the commitgen binary.

mod common;

use std::process::{Command, Stdio};

use common::TestRepo;

fn commitgen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_commitgen"));
    cmd.stdin(Stdio::null());
    cmd
}

#[test]
fn test_version_command() {
    let output = commitgen().arg("version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CommitGen version: 0.1.0"));
}

#[test]
fn test_commit_outside_repo_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = commitgen()
        .arg("commit")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not a git repository"));
}

#[test]
fn test_commit_push_flag_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let output = commitgen()
        .args(["commit", "-p"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    // Fails on the repository check, not on argument parsing.
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not a git repository"));
}

#[test]
fn test_commit_without_terminal_fails_without_committing() {
    let repo = TestRepo::new();
    repo.commit_file("a.txt", "a\n", "chore: init");
    repo.write_file("a.txt", "a2\n");
    repo.stage("a.txt");

    let output = commitgen()
        .arg("commit")
        .current_dir(repo.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(repo.commit_count(), 1);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let output = commitgen().arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
}
