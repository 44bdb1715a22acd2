//! Integration tests for the append workflow

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{orgcal_cmd, record_json, write_file};

fn build_journal(temp: &TempDir) {
    write_file(
        temp.path(),
        "input1.json",
        &record_json("2024-01-15", "Lunch", "1200", "1300", &["Table booked"], &[]),
    );
    write_file(
        temp.path(),
        "input2.json",
        &record_json("2024-01-17", "Review", "1400", "1530", &[], &["Send notes"]),
    );
    orgcal_cmd()
        .current_dir(temp.path())
        .args(["build", "input1.json", "input2.json", "-o", "journal.org"])
        .assert()
        .success();
}

#[test]
fn test_append_to_new_file() {
    let temp = TempDir::new().unwrap();
    build_journal(&temp);
    write_file(
        temp.path(),
        "input3.json",
        &record_json("2024-01-15", "Standup", "0900", "0915", &[], &[]),
    );

    orgcal_cmd()
        .current_dir(temp.path())
        .args(["append", "journal.org", "input3.json", "-o", "journal2.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record ingested, 3 events total"));

    let original = fs::read_to_string(temp.path().join("journal.org")).unwrap();
    let merged = fs::read_to_string(temp.path().join("journal2.org")).unwrap();

    assert!(!original.contains("Standup"));
    assert_eq!(merged.matches("* 2024\n").count(), 1);
    assert_eq!(merged.matches("** 2024-W03").count(), 1);
    assert!(merged.find("Standup").unwrap() < merged.find("Lunch").unwrap());
    assert!(merged.contains("***** TODO Send notes"));
}

#[test]
fn test_append_matches_single_build() {
    let temp = TempDir::new().unwrap();
    build_journal(&temp);
    write_file(
        temp.path(),
        "input3.json",
        &record_json("2024-03-01", "Demo", "1600", "1700", &["Recorded"], &[]),
    );

    orgcal_cmd()
        .current_dir(temp.path())
        .args(["append", "journal.org", "input3.json", "-o", "appended.org"])
        .assert()
        .success();
    orgcal_cmd()
        .current_dir(temp.path())
        .args([
            "build",
            "input1.json",
            "input2.json",
            "input3.json",
            "-o",
            "rebuilt.org",
        ])
        .assert()
        .success();

    let appended = fs::read_to_string(temp.path().join("appended.org")).unwrap();
    let rebuilt = fs::read_to_string(temp.path().join("rebuilt.org")).unwrap();
    assert_eq!(appended, rebuilt);
}

#[test]
fn test_append_in_place_by_default() {
    let temp = TempDir::new().unwrap();
    build_journal(&temp);
    write_file(
        temp.path(),
        "input3.json",
        &record_json("2024-02-01", "Planning", "1000", "1100", &[], &[]),
    );

    orgcal_cmd()
        .current_dir(temp.path())
        .args(["append", "journal.org", "input3.json"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("journal.org")).unwrap();
    assert!(content.contains("Planning"));
    assert!(content.contains("** 2024-W05"));
}

#[test]
fn test_append_to_foreign_document_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "notes.org", "* Shopping list\n- milk\n");
    write_file(
        temp.path(),
        "input.json",
        &record_json("2024-02-01", "Planning", "1000", "1100", &[], &[]),
    );

    orgcal_cmd()
        .current_dir(temp.path())
        .args(["append", "notes.org", "input.json"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("line 1"));

    let content = fs::read_to_string(temp.path().join("notes.org")).unwrap();
    assert_eq!(content, "* Shopping list\n- milk\n");
}

#[test]
fn test_append_bad_clock_line_fails() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "journal.org",
        "* 2024\n** 2024-W01\n*** 2024-01-01 Monday\n**** <2024-01-01 Mo. 09:00> Kickoff\n     :LOGBOOK:\n     CLOCK: [2024-01-01 Mo. 09:00]\n     :END:\n",
    );
    write_file(
        temp.path(),
        "input.json",
        &record_json("2024-01-02", "Next", "1000", "1100", &[], &[]),
    );

    orgcal_cmd()
        .current_dir(temp.path())
        .args(["append", "journal.org", "input.json"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Malformed clock line"));
}
