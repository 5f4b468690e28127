use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with its working directory and HOME pointed at a fresh
/// temp dir, so no outside config file can leak into a test.
fn pitchscore_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pitchscore").expect("binary should exist");
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn score_inside_optimal_range_prints_full_marks() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0"))
        .stdout(predicate::str::contains("ELITE"));
}

#[test]
fn score_unknown_metric_exits_with_rejection_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Nonexistent Metric", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("metric not found"));
}

#[test]
fn score_risk_metric_midpoint_rates_moderate_risk() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Elbow Valgus Torque", "47.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.5"))
        .stdout(predicate::str::contains("MODERATE RISK"));
}

#[test]
fn score_accepts_param_overrides() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args([
            "score",
            "Knee Lift Height",
            "7",
            "-p",
            "optimal_min=5",
            "-p",
            "optimal_max=10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0"));
}

#[test]
fn score_rejects_inverted_override_range_citing_both_keys() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args([
            "score",
            "Knee Lift Height",
            "7",
            "-p",
            "optimal_min=10",
            "-p",
            "optimal_max=5",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("optimal_min (10)"))
        .stderr(predicate::str::contains("optimal_max (5)"));
}

#[test]
fn score_rejects_unknown_param_keys() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45", "-p", "optimal_minimum=5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown threshold key"));
}

#[test]
fn score_rejects_malformed_param_pairs() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45", "-p", "optimal_min"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn score_banded_metric_with_profile_flags() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args([
            "score",
            "Knee Lift Height Adaptive",
            "80",
            "--age-group",
            "adult",
            "--skill-level",
            "elite",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0"))
        .stdout(predicate::str::contains("Optimal"));
}

#[test]
fn score_banded_metric_without_profile_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height Adaptive", "80"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no bands defined for this profile"));
}

#[test]
fn score_json_format_emits_machine_readable_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 100.0"))
        .stdout(predicate::str::contains("\"rating\": \"ELITE\""));
}

#[test]
fn score_output_echoes_description_and_parameters() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"description\": \"Hip flexion angle"))
        .stdout(predicate::str::contains("\"parameters_used\""))
        .stdout(predicate::str::contains("\"optimal_min\": 45.0"))
        .stdout(predicate::str::contains("\"optimal_max\": 90.0"));

    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("description: Hip flexion angle"))
        .stdout(predicate::str::contains(
            "parameters:  optimal_min=45, optimal_max=90",
        ));
}

#[test]
fn config_default_profile_reaches_banded_metrics() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("pitchscore.toml"),
        r#"
[profile]
age_group = "adult"
skill_level = "elite"
"#,
    )
    .expect("config should write");

    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height Adaptive", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0"))
        .stdout(predicate::str::contains("Optimal"));
}

#[test]
fn config_parameters_apply_when_cli_gives_none() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("pitchscore.toml"),
        r#"
[parameters."Knee Lift Height"]
optimal_min = 5.0
optimal_max = 10.0
"#,
    )
    .expect("config should write");

    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0"));
}

#[test]
fn cli_params_beat_config_parameters() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("pitchscore.toml"),
        r#"
[parameters."Knee Lift Height"]
optimal_min = 5.0
optimal_max = 10.0
"#,
    )
    .expect("config should write");

    pitchscore_in(&dir)
        .args([
            "score",
            "Knee Lift Height",
            "7",
            "-p",
            "optimal_min=1",
            "-p",
            "optimal_max=2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL ISSUE"));
}

#[test]
fn config_naming_unknown_metric_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("pitchscore.toml"),
        r#"
[parameters."No Such Metric"]
optimal_min = 1.0
"#,
    )
    .expect("config should write");

    pitchscore_in(&dir)
        .args(["score", "Knee Lift Height", "45"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown metric"));
}

#[test]
fn batch_with_mixed_rows_exits_partial() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[
  {"metric": "Knee Lift Height", "value": 60.0},
  {"metric": "No Such Metric", "value": 1.0},
  {"metric": "Elbow Valgus Torque", "value": 47.5}
]"#,
    )
    .expect("batch file should write");

    pitchscore_in(&dir)
        .args(["batch", "batch.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"scored\": 2"))
        .stdout(predicate::str::contains("\"failed\": 1"))
        .stdout(predicate::str::contains("metric not found"));
}

#[test]
fn batch_with_all_good_rows_exits_success() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[
  {"metric": "Knee Lift Height", "value": 60.0},
  {"metric": "Ball Velocity", "value": 58.0, "age_group": "youth", "skill_level": "elite"}
]"#,
    )
    .expect("batch file should write");

    pitchscore_in(&dir)
        .args(["batch", "batch.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"failed\": 0"));
}

#[test]
fn batch_text_format_prints_summary_line() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("batch.json"),
        r#"[{"metric": "Knee Lift Height", "value": 60.0}]"#,
    )
    .expect("batch file should write");

    pitchscore_in(&dir)
        .args(["batch", "batch.json", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 scored, 0 failed"));
}

#[test]
fn batch_missing_file_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["batch", "missing.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn batch_malformed_json_names_the_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("batch.json"), "not json").expect("batch file should write");

    pitchscore_in(&dir)
        .args(["batch", "batch.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("batch.json"));
}

#[test]
fn explain_fixed_metric_prints_thresholds() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["explain", "Knee Lift Height"])
        .assert()
        .success()
        .stdout(predicate::str::contains("optimal_min=45"))
        .stdout(predicate::str::contains("optimal_max=90"));
}

#[test]
fn explain_banded_metric_lists_profile_bands() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args([
            "explain",
            "Knee Lift Height Adaptive",
            "--age-group",
            "adult",
            "--skill-level",
            "elite",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("75..90"))
        .stdout(predicate::str::contains("Critical High"))
        .stdout(predicate::str::contains("skill levels at Adult (26-39):"))
        .stdout(predicate::str::contains("(selected)"));
}

#[test]
fn list_prints_the_whole_catalog() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Knee Lift Height"))
        .stdout(predicate::str::contains("Pitch Velocity"))
        .stdout(predicate::str::contains("Elbow Valgus Torque"));
}

#[test]
fn list_phase_filter_narrows_the_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    pitchscore_in(&dir)
        .args(["list", "--phase", "windup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Knee Lift Height"))
        .stdout(predicate::str::contains("Pitch Velocity").not());
}
