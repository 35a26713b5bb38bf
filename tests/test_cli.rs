//! End-to-end tests for the tabconv binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tabconv(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tabconv").unwrap();
    cmd.current_dir(temp_dir.path()).env_remove("RUST_LOG");
    cmd
}

fn sample_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    common::write_input(&temp_dir, "input.tsv", common::SAMPLE.as_bytes());
    temp_dir
}

#[test]
fn test_cli_csv() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .args(["input.tsv", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Conversion complete. Output saved to output.csv",
        ));

    let csv = std::fs::read_to_string(temp_dir.path().join("output.csv")).unwrap();
    assert_eq!(csv, common::SAMPLE_CSV);
}

#[test]
fn test_cli_json() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .args(["input.tsv", "-j"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.json"));

    let json = std::fs::read_to_string(temp_dir.path().join("output.json")).unwrap();
    assert_eq!(
        json,
        "[\n    {\n        \"name\": \"Alice\",\n        \"age\": \"30\"\n    },\n    {\n        \"name\": \"Bob\",\n        \"age\": \"25\"\n    }\n]"
    );
}

#[test]
fn test_cli_xml() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .args(["input.tsv", "-x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.xml"));

    let xml = std::fs::read_to_string(temp_dir.path().join("output.xml")).unwrap();
    assert_eq!(xml, common::SAMPLE_XML);
}

#[test]
fn test_cli_one_argument_prints_usage() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .arg("input.tsv")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: tabconv <input_file> <-c|-j|-x>"));

    assert!(common::output_files(&temp_dir).is_empty());
}

#[test]
fn test_cli_no_arguments_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    tabconv(&temp_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_three_arguments_prints_usage() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .args(["input.tsv", "-c", "-j"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));

    assert!(common::output_files(&temp_dir).is_empty());
}

#[test]
fn test_cli_invalid_flag() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .args(["input.tsv", "-z"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid format flag"))
        .stdout(predicate::str::contains("-c"))
        .stdout(predicate::str::contains("-j"))
        .stdout(predicate::str::contains("-x"));

    assert!(common::output_files(&temp_dir).is_empty());
}

#[test]
fn test_cli_double_dash_flag_is_invalid() {
    let temp_dir = sample_dir();

    tabconv(&temp_dir)
        .args(["input.tsv", "--"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid format flag '--'"));

    assert!(common::output_files(&temp_dir).is_empty());
}

#[test]
fn test_cli_short_row_json() {
    let temp_dir = TempDir::new().unwrap();
    common::write_input(&temp_dir, "input.tsv", b"name\tage\nAlice\t30\nBob\n");

    tabconv(&temp_dir).args(["input.tsv", "-j"]).assert().success();

    let json = std::fs::read_to_string(temp_dir.path().join("output.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[1], serde_json::json!({"name": "Bob"}));
    assert!(!json.contains("null"));
}

#[test]
fn test_cli_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    tabconv(&temp_dir)
        .args(["missing.tsv", "-c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));

    assert!(common::output_files(&temp_dir).is_empty());
}

#[test]
fn test_cli_invalid_xml_header_fails() {
    let temp_dir = TempDir::new().unwrap();
    common::write_input(&temp_dir, "input.tsv", b"first name\nAlice\n");

    tabconv(&temp_dir)
        .args(["input.tsv", "-x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("first name"));

    assert!(common::output_files(&temp_dir).is_empty());
}

#[test]
fn test_cli_arbitrary_bytes_reach_output() {
    let temp_dir = TempDir::new().unwrap();
    common::write_input(&temp_dir, "input.tsv", &common::all_bytes_input());

    tabconv(&temp_dir).args(["input.tsv", "-c"]).assert().success();

    assert!(temp_dir.path().join("output.csv").exists());
}

#[test]
fn test_cli_repeat_runs_identical() {
    let temp_dir = TempDir::new().unwrap();
    common::write_input(
        &temp_dir,
        "input.tsv",
        common::generate_table(25, 3).as_bytes(),
    );

    tabconv(&temp_dir).args(["input.tsv", "-x"]).assert().success();
    let first = std::fs::read(temp_dir.path().join("output.xml")).unwrap();

    tabconv(&temp_dir).args(["input.tsv", "-x"]).assert().success();
    let second = std::fs::read(temp_dir.path().join("output.xml")).unwrap();

    assert_eq!(first, second);
}
