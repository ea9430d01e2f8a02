//! Integration tests for the `iching` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn iching() -> Command {
    let mut cmd = Command::cargo_bin("iching").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("ICHING_LOG");
    cmd
}

/// Write a data file built from the bundled table with `edit` applied.
fn data_file(edit: impl FnOnce(String) -> String) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hexagrams.csv");
    fs::write(&path, edit(iching_core::catalog::BUILTIN_DATA.to_string())).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// ---------------------------------------------------------------------------
// cast
// ---------------------------------------------------------------------------

#[test]
fn cast_prints_a_hexagram() {
    iching()
        .args(["cast", "Will it rain?", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Will it rain?")
                .and(predicate::str::contains("http://www.akirarabelais.com/i/i.html#")),
        );
}

#[test]
fn cast_with_seed_is_reproducible() {
    let first = iching()
        .args(["cast", "q", "--seed", "7", "--json"])
        .output()
        .unwrap();
    let second = iching()
        .args(["cast", "q", "--seed", "7", "--json"])
        .output()
        .unwrap();
    assert!(first.status.success());

    let a: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(a["lines"], b["lines"]);
    assert_eq!(a["hexagram"]["number"], b["hexagram"]["number"]);
}

#[test]
fn cast_json_shape() {
    let output = iching()
        .args(["cast", "--seed", "1", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let lines = json["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 6);
    for line in lines {
        assert!((6..=9).contains(&line.as_u64().unwrap()));
    }
    let number = json["hexagram"]["number"].as_u64().unwrap();
    assert!((1..=64).contains(&number));
}

// ---------------------------------------------------------------------------
// interpret
// ---------------------------------------------------------------------------

#[test]
fn interpret_changing_lines() {
    iching()
        .args(["interpret", "9,8,8,6,7,8", "-q", "Should I move?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("3. Difficulty at the Beginning")
                .and(predicate::str::contains("Changing lines: 1, 4"))
                .and(predicate::str::contains("45. Gathering Together"))
                .and(predicate::str::contains("ic03.htm")),
        );
}

#[test]
fn interpret_stable_lines() {
    iching()
        .args(["interpret", "787878"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("63. After Completion")
                .and(predicate::str::contains("No changing lines")),
        );
}

#[test]
fn interpret_json_has_null_next() {
    let output = iching()
        .args(["interpret", "787878", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["lines"], serde_json::json!([7, 8, 7, 8, 7, 8]));
    assert!(json["next_hexagram"].is_null());
}

#[test]
fn interpret_rejects_bad_lines() {
    iching()
        .args(["interpret", "98867"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 6 lines"));

    iching()
        .args(["interpret", "9,8,8,6,7,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid line value: 5"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_by_number() {
    iching()
        .args(["show", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("42. Increase")
                .and(predicate::str::contains("http://www.sacred-texts.com/ich/ic42.htm")),
        );
}

#[test]
fn show_by_name() {
    iching()
        .args(["show", "the creative"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. The Creative (Qián)"));
}

#[test]
fn show_out_of_range() {
    iching()
        .args(["show", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn show_suggests_names() {
    iching()
        .args(["show", "Progres"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean").and(predicate::str::contains("Progress")));
}

// ---------------------------------------------------------------------------
// list / check
// ---------------------------------------------------------------------------

#[test]
fn list_all_hexagrams() {
    iching()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Creative")
                .and(predicate::str::contains("Before Completion"))
                .and(predicate::str::contains("64 hexagrams")),
        );
}

#[test]
fn check_builtin() {
    iching()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("64 hexagrams"));
}

#[test]
fn check_external_data() {
    let (_dir, path) = data_file(|data| data);
    iching()
        .args(["check", "--data", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn duplicate_signature_is_fatal() {
    let (_dir, path) = data_file(|data| {
        data.replacen(
            "false|false|false|false|false|false,",
            "true|true|true|true|true|true,",
            1,
        )
    });
    iching()
        .args(["cast", "--data", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("share signature"));
}

#[test]
fn missing_data_file_is_fatal() {
    iching()
        .args(["list", "--data", "/nonexistent/hexagrams.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load hexagrams"));
}
