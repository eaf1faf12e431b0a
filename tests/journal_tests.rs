//! Integration tests for write, mood, timeline and stats

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use walkdir::WalkDir;

mod common;
use common::{init_journal, solace_cmd};

fn entry_files(root: &std::path::Path, owner: &str) -> usize {
    let dir = root.join(".solace/entries").join(owner);
    if !dir.exists() {
        return 0;
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_write_entry() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .args(["write", "Walked by the river", "--mood", "good", "--tag", "Outdoors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry (Good"));

    assert_eq!(entry_files(temp.path(), "alex"), 1);

    solace_cmd()
        .current_dir(temp.path())
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Journey (1 entry)"))
        .stdout(predicate::str::contains("Today"))
        .stdout(predicate::str::contains("Walked by the river"))
        .stdout(predicate::str::contains("#outdoors"));
}

#[test]
fn test_write_accepts_numeric_mood() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .args(["write", "Fine", "--mood", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Down"));
}

#[test]
fn test_write_invalid_mood() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .args(["write", "text", "--mood", "meh"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid mood: 'meh'"));

    assert_eq!(entry_files(temp.path(), "alex"), 0);
}

#[test]
fn test_write_empty_and_too_long_rejected() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .args(["write", "   ", "--mood", "okay"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Nothing was saved"));

    let long = "a".repeat(2001);
    solace_cmd()
        .current_dir(temp.path())
        .args(["write", long.as_str(), "--mood", "okay"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("2001"));

    assert_eq!(entry_files(temp.path(), "alex"), 0);
}

#[test]
fn test_mood_daily_limit() {
    let temp = init_journal("alex");

    for mood in ["good", "okay", "down"] {
        solace_cmd()
            .current_dir(temp.path())
            .args(["mood", mood])
            .assert()
            .success()
            .stdout(predicate::str::contains("Logged mood"));
    }

    solace_cmd()
        .current_dir(temp.path())
        .args(["mood", "tough", "--note", "one more"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("already checked in 3 times"));

    let moods_dir = temp.path().join(".solace/moods/alex");
    let files: Vec<_> = fs::read_dir(moods_dir).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_mood_note_shown() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .args(["mood", "amazing", "--note", "Finished the project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amazing - Feeling fantastic and energized"))
        .stdout(predicate::str::contains("Finished the project"));
}

#[test]
fn test_owner_override_separates_histories() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .env("SOLACE_OWNER", "sam")
        .args(["write", "Sam's day", "--mood", "okay"])
        .assert()
        .success();

    assert_eq!(entry_files(temp.path(), "sam"), 1);
    assert_eq!(entry_files(temp.path(), "alex"), 0);

    solace_cmd()
        .current_dir(temp.path())
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_timeline_paging() {
    let temp = init_journal("alex");

    for i in 0..8 {
        solace_cmd()
            .current_dir(temp.path())
            .args(["write", &format!("entry number {}", i), "--mood", "okay"])
            .assert()
            .success();
    }

    solace_cmd()
        .current_dir(temp.path())
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Journey (8 entries)"))
        .stdout(predicate::str::contains("Page 1 of 2"));

    solace_cmd()
        .current_dir(temp.path())
        .args(["timeline", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2 of 2"));
}

#[test]
fn test_stats() {
    let temp = init_journal("alex");

    solace_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet"));

    for mood in ["good", "good", "tough"] {
        solace_cmd()
            .current_dir(temp.path())
            .args(["write", "something happened", "--mood", mood])
            .assert()
            .success();
    }

    solace_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries:        3"))
        .stdout(predicate::str::contains("Average mood:   3.0 / 5"))
        .stdout(predicate::str::contains("Most frequent:  😊 Good"))
        .stdout(predicate::str::contains("Streak:         1 day"));
}

#[test]
fn test_corrupt_entry_reported() {
    let temp = init_journal("alex");
    let month = temp.path().join(".solace/entries/alex/2025-01");
    fs::create_dir_all(&month).unwrap();
    fs::write(month.join("20250101T080000Z-broken.toml"), "not = [valid").unwrap();

    solace_cmd()
        .current_dir(temp.path())
        .arg("timeline")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Corrupt journal entry"));
}
