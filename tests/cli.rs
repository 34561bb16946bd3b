//! End-to-end tests for the `yaml-schema` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

fn yaml_schema() -> Command {
    Command::new(env!("CARGO_BIN_EXE_yaml-schema"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = yaml_schema()
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_json_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.yaml");
    fs::write(&input, "a: 1\nb: [x, y]\n").unwrap();

    let output = yaml_schema()
        .arg(&input)
        .args(["--emit", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({"a": 1, "b": ["x", "y"]}));
}

#[test]
fn test_schema_from_stdin_with_url() {
    let output = run_with_stdin(&["--emit", "schema", "--schema-url", DRAFT_07], "a: 1\n");

    assert!(output.status.success());
    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["$schema"], DRAFT_07);
    assert_eq!(schema["properties"]["a"]["type"], "integer");
}

#[test]
fn test_both_outputs_by_default() {
    let output = run_with_stdin(&["-"], "a: 1\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let (json, schema) = stdout.split_once("\n\n").unwrap();
    assert_eq!(json, "{\n  \"a\": 1\n}");
    assert!(schema.contains("\"$schema\""));
}

#[test]
fn test_output_file_creates_directories() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested/out/schema.json");

    let output = run_with_stdin(
        &["--emit", "schema", "-o", out.to_str().unwrap()],
        "- 1\n- 2\n",
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let schema: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(schema["type"], "array");
}

#[test]
fn test_invalid_yaml_exits_with_error() {
    let output = run_with_stdin(&[], "a:\n  b: 1\n c: 2\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid YAML"));
}

#[test]
fn test_missing_input_file() {
    let output = yaml_schema().arg("/nonexistent/doc.yaml").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("reading input file"));
}

#[test]
fn test_verbose_logs_debug_events() {
    let output = run_with_stdin(&["-v", "--emit", "json"], "a: 1\n");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("DEBUG"));
    assert!(stderr.contains("read YAML"));
}

#[test]
fn test_quiet_by_default() {
    let output = run_with_stdin(&["--emit", "json"], "a: 1\n");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("DEBUG"));
}
