//! Integration tests for the fnschema CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fnschema_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("fnschema");
    cmd.env("NO_COLOR", "1");
    cmd
}

const WEATHER_TOML: &str = r#"
[options]
ignore_args = ["ctx"]

[[functions]]
name = "get_current_weather"
doc = """
Get the current weather

:param location: The city and state, e.g. San Francisco, CA
:param unit: The unit of temperature
"""
parameters = [
  { name = "ctx" },
  { name = "location", type = { kind = "string" } },
  { name = "unit", type = { kind = "literal", values = ["celsius", "fahrenheit"] }, default = "fahrenheit" },
]
"#;

const BROKEN_JSON: &str = r#"{
  "functions": [
    {
      "name": "documented",
      "doc": "Fine.\n\n:param a: A number.",
      "parameters": [{"name": "a", "type": {"kind": "integer"}}]
    },
    {
      "name": "undocumented",
      "parameters": [{"name": "a", "type": {"kind": "integer"}}]
    }
  ]
}"#;

fn write_manifest(dir: &TempDir, file: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_compile_openai_from_toml() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "weather.toml", WEATHER_TOML);

    let output = fnschema_cmd()
        .args(["compile", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rendered: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rendered[0]["type"], "function");
    assert_eq!(rendered[0]["function"]["name"], "get_current_weather");
    assert_eq!(
        rendered[0]["function"]["parameters"]["required"],
        serde_json::json!(["location"])
    );
    assert!(rendered[0]["function"]["parameters"]["properties"]["ctx"].is_null());
}

#[test]
fn test_compile_anthropic_invocation() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "weather.toml", WEATHER_TOML);

    fnschema_cmd()
        .args([
            "compile",
            path.to_str().unwrap(),
            "--provider",
            "anthropic",
            "--invocation",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tools\""))
        .stdout(predicate::str::contains("\"input_schema\""));
}

#[test]
fn test_compile_intermediate() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "weather.toml", WEATHER_TOML);

    fnschema_cmd()
        .args(["compile", path.to_str().unwrap(), "--intermediate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"parameters\""))
        .stdout(predicate::str::contains("\"input_schema\"").not());
}

#[test]
fn test_compile_unknown_provider_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "weather.toml", WEATHER_TOML);

    fnschema_cmd()
        .args(["compile", path.to_str().unwrap(), "--provider", "gemini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown provider: gemini"));
}

#[test]
fn test_compile_stops_at_first_failure() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "broken.json", BROKEN_JSON);

    fnschema_cmd()
        .args(["compile", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compile undocumented"));
}

#[test]
fn test_check_reports_each_function() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "broken.json", BROKEN_JSON);

    fnschema_cmd()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("OK documented"))
        .stdout(predicate::str::contains(
            "ERR undocumented: the function must have a docstring",
        ))
        .stderr(predicate::str::contains("1 of 2 functions failed"));
}

#[test]
fn test_check_passes() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "weather.toml", WEATHER_TOML);

    fnschema_cmd()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK get_current_weather"));
}

#[test]
fn test_invalid_manifest_names_field() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        &temp,
        "bad.json",
        r#"{"functions": [{"name": "f", "parameters": [{"name": "a", "type": {"kind": "decimal"}}]}]}"#,
    );

    fnschema_cmd()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid manifest"))
        .stderr(predicate::str::contains("functions[0].parameters[0].type"));
}

#[test]
fn test_missing_manifest_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.json");

    fnschema_cmd()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read manifest"));
}

#[test]
fn test_providers_lists_builtins() {
    fnschema_cmd()
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::eq("openai\nanthropic\n"));
}

#[test]
fn test_schema_outputs_valid_json() {
    let output = fnschema_cmd().arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema.get("$defs").is_some() || schema.get("definitions").is_some());
    assert_eq!(schema["title"], "Manifest");
}
