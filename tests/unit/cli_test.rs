//! Integration tests for the linecheck CLI

use assert_cmd::cargo;
use predicates::prelude::*;

fn linecheck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("linecheck"))
}

#[test]
fn test_version() {
    linecheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("linecheck"));
}

#[test]
fn test_help() {
    linecheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Classify an inspection score"));
}

#[test]
fn test_no_args_shows_info() {
    linecheck().assert().success().stdout(predicate::str::contains("linecheck"));
}

#[test]
fn test_inspect_passed_unit() {
    linecheck()
        .args(["inspect", "--score", "82"])
        .assert()
        .success()
        .stdout(predicate::str::contains("82/100"))
        .stdout(predicate::str::contains("Grade: B"))
        .stdout(predicate::str::contains("PASSED"))
        .stdout(predicate::str::contains("approved and packed"));
}

#[test]
fn test_inspect_failed_unit_suggests_rework() {
    linecheck()
        .args(["inspect", "--score", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("Defect Detected"))
        .stdout(predicate::str::contains("rework"));
}

#[test]
fn test_inspect_json_output() {
    linecheck()
        .args(["inspect", "--score", "96", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"passed\""))
        .stdout(predicate::str::contains("\"grade\": \"A+\""))
        .stdout(predicate::str::contains("\"batch_number\""));
}

#[test]
fn test_inspect_rejects_out_of_range_score() {
    linecheck()
        .args(["inspect", "--score", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid score 101"));
}

#[test]
fn test_inspect_rejects_negative_score() {
    linecheck()
        .args(["inspect", "--score=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid score -1"));
}

#[test]
fn test_checklist_baseline_only() {
    linecheck()
        .args(["checklist", "--score", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size Accuracy"))
        .stdout(predicate::str::contains("Absorbent Core"))
        .stdout(predicate::str::contains("Minor Adjustment").not());
}

#[test]
fn test_checklist_full_at_low_score() {
    linecheck()
        .args(["checklist", "--score", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minor Adjustment"))
        .stdout(predicate::str::contains("Defect Detected"));
}

#[test]
fn test_checklist_json_output() {
    linecheck()
        .args(["checklist", "--score", "42", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"score\": 42"))
        .stdout(predicate::str::contains("\"severity\": \"error\""));
}

#[test]
fn test_version_subcommand_json() {
    linecheck()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}
