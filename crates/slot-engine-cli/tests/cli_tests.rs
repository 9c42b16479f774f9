//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including stdin input, config files, and error
//! reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// parse / format / conflict
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_prints_json_slot() {
    let output = slots().args(["parse", "TTH 14:00-15:15"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["days"], serde_json::json!(["Tuesday", "Thursday"]));
    assert_eq!(value["startTime"], serde_json::json!(14.0));
    assert_eq!(value["endTime"], serde_json::json!(15.25));
}

#[test]
fn parse_rejects_unknown_day_code() {
    slots()
        .args(["parse", "MXF 09:00-09:50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day code 'X'"));
}

#[test]
fn format_renders_twelve_hour_range() {
    slots()
        .args(["format", "MWF 12:00-13:00"])
        .assert()
        .success()
        .stdout("12:00 PM - 1:00 PM\n");
}

#[test]
fn format_names_bad_time_token() {
    slots()
        .args(["format", "MWF 9am-10am"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'9am'"));
}

#[test]
fn conflict_reports_overlap() {
    slots()
        .args(["conflict", "MWF 09:00-09:50", "MWF 09:30-10:30"])
        .assert()
        .success()
        .stdout("conflict\n");
}

#[test]
fn conflict_treats_touching_as_free() {
    slots()
        .args(["conflict", "MWF 09:00-09:50", "MWF 09:50-10:40"])
        .assert()
        .success()
        .stdout("no conflict\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// search
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn search_by_query() {
    slots()
        .args(["search", "-i", &fixture("catalog.json"), "--query", "park"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CS101\tIntro to Programming\t9:00 AM - 9:50 AM"))
        .stdout(predicate::str::contains("PHYS110"))
        .stdout(predicate::str::contains("MATH151").not());
}

#[test]
fn search_morning_band_from_stdin() {
    let catalog = std::fs::read_to_string(fixture("catalog.json")).unwrap();
    let output = slots()
        .args(["search", "--band", "morning"])
        .write_stdin(catalog)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let crns: Vec<&str> = stdout
        .lines()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(crns, vec!["CS101", "MATH151", "ENG210"]);
}

#[test]
fn search_waitlisted() {
    slots()
        .args([
            "search",
            "-i",
            &fixture("catalog.json"),
            "--availability",
            "waitlisted",
        ])
        .assert()
        .success()
        .stdout("CS201\tData Structures\t2:00 PM - 3:15 PM\n");
}

#[test]
fn search_rejects_invalid_json() {
    slots()
        .arg("search")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check / free
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_lists_pairwise_conflicts() {
    slots()
        .args([
            "check",
            "-i",
            &fixture("catalog.json"),
            "--crn",
            "CS101,MATH151,ENG210",
        ])
        .assert()
        .success()
        .stdout(
            "CS101 and MATH151 conflict on Monday, Wednesday (20 min)\n\
             MATH151 and ENG210 conflict on Monday, Wednesday (50 min)\n",
        );
}

#[test]
fn check_without_conflicts() {
    slots()
        .args(["check", "-i", &fixture("catalog.json"), "--crn", "CS101, CS201"])
        .assert()
        .success()
        .stdout("No conflicts\n");
}

#[test]
fn check_unknown_crn_fails() {
    slots()
        .args(["check", "-i", &fixture("catalog.json"), "--crn", "CS101,BIO999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown CRN: 'BIO999'"));
}

#[test]
fn check_duplicate_crn_fails() {
    slots()
        .args(["check", "-i", &fixture("catalog.json"), "--crn", "CS101,CS101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already on the schedule"));
}

#[test]
fn free_uses_configured_window() {
    slots()
        .args([
            "--config",
            &fixture("slots.toml"),
            "free",
            "-i",
            &fixture("catalog.json"),
            "--crn",
            "CS101,MATH151",
            "--day",
            "M",
        ])
        .assert()
        .success()
        .stdout("8:00 AM - 9:00 AM (60 min)\n10:45 AM - 12:00 PM (75 min)\n");
}

#[test]
fn free_defaults_to_eight_to_ten() {
    slots()
        .args([
            "free",
            "-i",
            &fixture("catalog.json"),
            "--crn",
            "CS101,MATH151",
            "--day",
            "tuesday",
        ])
        .assert()
        .success()
        .stdout("8:00 AM - 10:00 PM (840 min)\n");
}

#[test]
fn free_rejects_weekend() {
    slots()
        .args([
            "free",
            "-i",
            &fixture("catalog.json"),
            "--crn",
            "CS101",
            "--day",
            "Saturday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown day"));
}

// ─────────────────────────────────────────────────────────────────────────────
// gpa / expand / config
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn gpa_from_file() {
    slots()
        .args(["gpa", "-i", &fixture("grades.json")])
        .assert()
        .success()
        .stdout("GPA: 3.43\n");
}

#[test]
fn gpa_with_nothing_graded() {
    slots()
        .arg("gpa")
        .write_stdin(r#"[{"courseId": "1", "credits": 3}]"#)
        .assert()
        .success()
        .stdout("GPA: 0.00\n");
}

#[test]
fn expand_uses_configured_term() {
    let output = slots()
        .args([
            "--config",
            &fixture("slots.toml"),
            "expand",
            "MWF 09:00-09:50",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let meetings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let meetings = meetings.as_array().unwrap();
    assert_eq!(meetings.len(), 6);
    assert_eq!(meetings[0]["day"], "Monday");
    assert_eq!(meetings[0]["start"], "2026-01-12T09:00:00Z");
    assert_eq!(meetings[0]["end"], "2026-01-12T09:50:00Z");
}

#[test]
fn expand_without_term_fails() {
    slots()
        .args(["expand", "MWF 09:00-09:50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[term]"));
}

#[test]
fn broken_config_fails() {
    slots()
        .args(["--config", &fixture("broken.toml"), "format", "M 09:00-10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn missing_config_file_fails() {
    slots()
        .args(["--config", "/nonexistent/slots.toml", "format", "M 09:00-10:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn expand_in_local_timezone_across_dst() {
    let output = slots()
        .args([
            "--config",
            &fixture("slots_ny.toml"),
            "expand",
            "M 09:00-09:50",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let meetings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let meetings = meetings.as_array().unwrap();
    assert_eq!(meetings.len(), 2);
    assert_eq!(meetings[0]["start"], "2026-03-02T14:00:00Z");
    assert_eq!(meetings[1]["start"], "2026-03-09T13:00:00Z");
}
