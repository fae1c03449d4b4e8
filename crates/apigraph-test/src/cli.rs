//! CLI regression tests for the `apigraph` binary.
//!
//! These tests invoke the binary as a subprocess to catch regressions in flag
//! names, exit codes and output formats.
//!
//! Run with: `cargo test -p apigraph-test`
//! Requires the `apigraph` binary to be built first (`cargo build -p apigraph`).

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::{json, Value};

use crate::model::{fixture_path, write_model, ModelBuilder};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns an assert_cmd Command wrapping the `apigraph` binary.
fn apigraph() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("apigraph")
        .expect("apigraph binary not found, run `cargo build -p apigraph` first")
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

// ---------------------------------------------------------------------------
// apigraph summary
// ---------------------------------------------------------------------------

#[test]
fn summary_prints_api_metadata() {
    let output = apigraph()
        .args(["summary", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = stdout_json(&output);
    assert_eq!(summary["name"], "Pet Store");
    assert_eq!(summary["version"], "1.0.0");
    assert_eq!(summary["contentType"], json!(["application/json"]));
    assert!(summary.get("endPoints").is_none());
}

#[test]
fn summary_of_library_exits_one() {
    apigraph()
        .args(["summary", "--model"])
        .arg(fixture_path("library.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not encode an API"));
}

#[test]
fn summary_missing_file_exits_one() {
    apigraph()
        .args(["summary", "--model", "this-file-does-not-exist.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("failed to load model"));
}

#[test]
fn summary_invalid_json_exits_one() {
    apigraph()
        .args(["summary", "--model"])
        .arg(fixture_path("not-json.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("JSON error"));
}

// ---------------------------------------------------------------------------
// apigraph project
// ---------------------------------------------------------------------------

#[test]
fn project_defaults_to_the_api() {
    let output = apigraph()
        .args(["project", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let api = stdout_json(&output);
    assert_eq!(api["id"], "#/web-api");
    assert_eq!(api["endPoints"][0]["path"], "/pets");
    assert_eq!(api["endPoints"][1]["parameters"][0]["name"], "petId");
}

#[test]
fn project_single_node_by_id() {
    let output = apigraph()
        .args(["project", "--id", "#/declares/shape/Pet", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let shape = stdout_json(&output);
    assert_eq!(shape["name"], "Pet");
    let paths: Vec<&str> = shape["properties"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["path"].as_str())
        .collect();
    assert_eq!(paths, vec!["data:id", "data:name"]);
}

#[test]
fn project_as_yaml() {
    apigraph()
        .args(["project", "--format", "yaml", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .stdout(contains("name: Pet Store"))
        .stdout(contains("path: /pets"));
}

#[test]
fn project_unknown_id_exits_one() {
    apigraph()
        .args(["project", "--id", "#/nope", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("no node with id '#/nope'"));
}

#[test]
fn project_unknown_kind_exits_one() {
    apigraph()
        .args(["project", "--kind", "gizmo", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unknown node kind 'gizmo'"));
}

#[test]
fn project_unknown_format_exits_one() {
    apigraph()
        .args(["project", "--format", "xml", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unknown output format"));
}

// ---------------------------------------------------------------------------
// apigraph resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_merges_link_targets() {
    let id = "#/web-api/end-points/%2Fpets/post/request/application%2Fjson/schema";
    let output = apigraph()
        .args(["resolve", "--id", id, "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let node = stdout_json(&output);
    assert_eq!(node["@id"], id);
    assert_eq!(node["shacl:name"], "Pet");
    assert_eq!(node["shacl:property"].as_array().map(Vec::len), Some(2));
}

#[test]
fn resolve_unknown_id_exits_one() {
    apigraph()
        .args(["resolve", "--id", "#/nope", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .failure()
        .code(1);
}

// ---------------------------------------------------------------------------
// apigraph endpoints
// ---------------------------------------------------------------------------

#[test]
fn endpoints_lists_operations() {
    apigraph()
        .args(["endpoints", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .stdout("GET /pets\nPOST /pets\nGET /pets/{petId}\n");
}

#[test]
fn endpoints_of_flattened_models() {
    apigraph()
        .args(["endpoints", "--model"])
        .arg(fixture_path("todo-flattened.json"))
        .assert()
        .success()
        .stdout("GET /todos\nGET /todos/{id}\nDELETE /todos/{id}\n");
}

#[test]
fn endpoints_with_full_uris() {
    apigraph()
        .args(["endpoints", "--uri", "--model"])
        .arg(fixture_path("todo-flattened.json"))
        .assert()
        .success()
        .stdout(contains("GET http://todo.example.com/v2/todos\n"));
}

#[test]
fn endpoints_of_built_model() {
    let model = ModelBuilder::web_api("Built")
        .endpoint("/a", &["get"])
        .endpoint("/b", &["put", "patch"])
        .build();
    let (_dir, path) = write_model(&model).unwrap();

    apigraph()
        .args(["endpoints", "--model"])
        .arg(&path)
        .assert()
        .success()
        .stdout("GET /a\nPUT /b\nPATCH /b\n");
}

// ---------------------------------------------------------------------------
// Global flags
// ---------------------------------------------------------------------------

#[test]
fn unknown_log_format_exits_one() {
    apigraph()
        .args(["--log-format", "xml", "endpoints", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("unknown log format"));
}

#[test]
fn log_format_from_environment() {
    apigraph()
        .env_remove("RUST_LOG")
        .env("APIGRAPH_LOG_FORMAT", "json")
        .env("APIGRAPH_LOG_LEVEL", "debug")
        .args(["endpoints", "--model"])
        .arg(fixture_path("petstore.json"))
        .assert()
        .success()
        .stdout(contains("GET /pets"))
        .stderr(contains("\"message\":\"model loaded\""));
}

#[test]
fn missing_subcommand_fails() {
    apigraph().assert().failure().code(2);
}
