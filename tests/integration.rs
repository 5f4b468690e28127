// Integration tests for the pitchscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes, and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the pitchscore binary.
fn pitchscore() -> Command {
    Command::cargo_bin("pitchscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    pitchscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pitchscore"));
}

#[test]
fn cli_help_flag() {
    pitchscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("biomechanics"));
}

#[test]
fn score_requires_a_value() {
    pitchscore()
        .args(["score", "Knee Lift Height"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_age_group_without_skill_level() {
    pitchscore()
        .args(["score", "Knee Lift Height", "45", "--age-group", "adult"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--skill-level"));
}

#[test]
fn score_rejects_skill_level_without_age_group() {
    pitchscore()
        .args(["score", "Knee Lift Height", "45", "--skill-level", "elite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--age-group"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    pitchscore()
        .args(["-q", "-v", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn list_rejects_unknown_phase() {
    pitchscore()
        .args(["list", "--phase", "warmup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn batch_requires_a_file() {
    pitchscore()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn explain_requires_a_metric() {
    pitchscore()
        .arg("explain")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
