// ABOUTME: Integration tests for the docpage CLI binary.
// ABOUTME: Tests file and stdin parsing, the JSON envelope, and failure reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn docpage_cmd() -> Command {
    Command::cargo_bin("docpage").unwrap()
}

const EXPORT: &str = concat!(
    "<html><body>",
    "<p><span>GETTING STARTED</span></p>",
    "<p><span>A First Lesson</span></p>",
    "<hr>",
    "<p>The second section of the document, written out as body copy.</p>",
    "</body></html>"
);

#[test]
fn parse_export_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("export.html");
    fs::write(&html_path, EXPORT).unwrap();

    docpage_cmd()
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"section-1\""))
        .stdout(predicate::str::contains("GETTING STARTED"))
        .stdout(predicate::str::contains("A First Lesson"));
}

#[test]
fn parse_export_from_stdin_compact() {
    let output = docpage_cmd()
        .arg("--compact")
        .arg("-")
        .write_stdin(EXPORT)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    // Compact output is a single line of JSON.
    assert_eq!(stdout.trim().lines().count(), 1);

    let sections: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let arr = sections.as_array().expect("bare section array");
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["eyebrow"], "GETTING STARTED");
}

#[test]
fn multiple_targets_get_envelope() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.html");
    let b = temp_dir.path().join("b.html");
    fs::write(&a, "<p>Doc A</p>").unwrap();
    fs::write(&b, "<p>Doc B</p>").unwrap();

    let output = docpage_cmd()
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(envelope["parsed"], 2);
    assert_eq!(envelope["failed"], 0);
    assert_eq!(envelope["documents"].as_array().unwrap().len(), 2);
}

#[test]
fn missing_file_reported_in_envelope() {
    let output = docpage_cmd()
        .arg("/no/such/export.html")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(envelope["failed"], 1);
    assert!(envelope["documents"][0]["error"]
        .as_str()
        .unwrap()
        .contains("file not found"));
}

#[test]
fn no_args_fails() {
    docpage_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
