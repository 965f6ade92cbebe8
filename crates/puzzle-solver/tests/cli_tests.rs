//! Integration tests for the puzzle-solver binary.

use std::fs;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

fn solver() -> Command {
    cargo_bin_cmd!("puzzle-solver")
}

#[test]
fn test_help_lists_puzzles() {
    solver()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clock"))
        .stdout(predicate::str::contains("water"))
        .stdout(predicate::str::contains("tipover"))
        .stdout(predicate::str::contains("play"));
}

#[test]
fn test_clock_prints_steps() {
    solver()
        .args(["clock", "12", "3", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hours: 12, Start: 3, End: 9"))
        .stdout(predicate::str::contains("Total configs:"))
        .stdout(predicate::str::contains("Unique configs: 12"))
        .stdout(predicate::str::contains("Step 0: 3\n"))
        .stdout(predicate::str::contains("Step 6: 9\n"))
        .stdout(predicate::str::contains("Step 7").not());
}

#[test]
fn test_clock_rejects_bad_hour() {
    solver()
        .args(["clock", "12", "3", "13"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_water_solution_as_json() {
    let output = solver()
        .args(["--json", "water", "4", "5", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["solved"], true);
    assert_eq!(report["moves"], 6);
    assert_eq!(report["puzzle"]["capacities"], serde_json::json!([5, 3]));
    assert_eq!(report["path"][6]["levels"], serde_json::json!([4, 3]));
    assert!(report["totalConfigs"].as_u64().unwrap() >= report["uniqueConfigs"].as_u64().unwrap());
}

#[test]
fn test_water_no_solution() {
    solver()
        .args(["water", "6", "5", "3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Amount: 6, Buckets: [5, 3]"))
        .stdout(predicate::str::contains("No Solution"));
}

#[test]
fn test_water_requires_buckets() {
    solver().args(["water", "4"]).assert().code(2);
}

#[test]
fn test_tipover_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.txt");
    fs::write(&path, "3 3 0 0 2 2\n1 2 0\n0 0 0\n0 0 1\n").unwrap();

    solver()
        .arg("tipover")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Board: 3x3, Start: (0, 0), Goal: (2, 2)"))
        .stdout(predicate::str::contains("Step 3: \n"))
        .stdout(predicate::str::contains("Step 4").not());
}

#[test]
fn test_tipover_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.txt");
    fs::write(&path, "2 2 0 0 1 1\n1 1\n").unwrap();

    solver()
        .arg("tipover")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_play_script() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.txt");
    fs::write(&path, "1 4 0 0 0 3\n2 0 0 1\n").unwrap();

    solver()
        .arg("play")
        .arg(&path)
        .write_stdin("show\nhint\nmove east\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New file loaded."))
        .stdout(predicate::str::contains("A tower has been tipped over."))
        .stdout(predicate::str::contains("YOU WON!"));
}
