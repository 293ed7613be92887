#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use dashkit_testkit::fixture_path;
use serde_json::{Value, json};

#[test]
fn get_json_reports_found_value_and_keys() {
	let json = run_json(&["get", &fixture("nested.json"), "a[0].b.c", "--json"]);

	assert_eq!(json["found"], true);
	assert_eq!(json["value"], 3);
	assert_eq!(json["keys"], json!(["a", 0, "b", "c"]));
}

#[test]
fn get_uses_default_only_when_missing() {
	let missing = run_json(&["get", &fixture("nested.json"), "a[5]", "--default", "\"D\"", "--json"]);
	assert_eq!(missing["found"], false);
	assert_eq!(missing["value"], "D");

	let stored_null = run_json(&["get", &fixture("nested.json"), "blank", "--default", "\"D\"", "--json"]);
	assert_eq!(stored_null["found"], true);
	assert_eq!(stored_null["value"], Value::Null);
}

#[test]
fn get_text_output_prints_undefined_for_missing_paths() {
	let output = run(&["get", &fixture("nested.json"), "a.b.c"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "undefined");
}

#[test]
fn at_json_keeps_one_result_per_path() {
	let json = run_json(&["at", &fixture("nested.json"), "a[0].b.c", "a[1]", "a[2]", "--json"]);

	let results = json["results"].as_array().expect("results array");
	assert_eq!(results.len(), 3);
	assert_eq!(results[0]["value"], 3);
	assert_eq!(results[1]["value"], 4);
	assert_eq!(results[2]["found"], false);
}

#[test]
fn keys_json_shows_parsed_sequence() {
	let json = run_json(&["keys", "a[0][\"b.c\"].d", "--json"]);

	assert_eq!(json["canonical"], "a[0][\"b.c\"].d");
	let kinds: Vec<_> = json["keys"].as_array().expect("keys array").iter().map(|key| key["kind"].clone()).collect();
	assert_eq!(kinds, [json!("name"), json!("index"), json!("name"), json!("name")]);
}

#[test]
fn count_by_json_groups_fixture_users() {
	let json = run_json(&["count-by", &fixture("users.json"), "--by", "active", "--json"]);

	assert_eq!(json["op"], "count-by");
	assert_eq!(json["classification"], "array");
	assert_eq!(json["result"], json!({"true": 2, "false": 1}));
}

#[test]
fn map_over_object_selected_with_at() {
	let json = run_json(&["map", &fixture("nested.json"), "--at", "scores", "--json"]);

	assert_eq!(json["classification"], "plain-object");
	assert_eq!(json["entries"], 2);
	assert_eq!(json["result"], json!([4, 8]));
}

#[test]
fn filter_and_every_use_property_iteratee() {
	let filtered = run_json(&["filter", &fixture("users.json"), "--by", "tags[0]", "--json"]);
	let users: Vec<_> = filtered["result"].as_array().expect("result array").iter().map(|user| user["user"].clone()).collect();
	assert_eq!(users, [json!("barney"), json!("fred")]);

	let every = run_json(&["every", &fixture("users.json"), "--by", "age", "--json"]);
	assert_eq!(every["result"], true);
}

#[test]
fn inspect_reports_string_as_array_like() {
	let json = run_json(&["inspect", &fixture("nested.json"), "--at", "label", "--json"]);

	assert_eq!(json["type"], "string");
	assert_eq!(json["classification"], "array-like");
	assert_eq!(json["length"], 3);
	assert_eq!(json["empty"], false);
}

#[test]
fn inspect_reports_empty_object_and_missing_target() {
	let empty = run_json(&["inspect", &fixture("nested.json"), "--at", "empty", "--json"]);
	assert_eq!(empty["classification"], "plain-object");
	assert_eq!(empty["empty"], true);

	let missing = run_json(&["inspect", &fixture("nested.json"), "--at", "nope", "--json"]);
	assert_eq!(missing["found"], false);
	assert_eq!(missing["classification"], "nullish");
}

#[test]
fn stdin_input_is_read_with_dash() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_dashkit"))
		.args(["get", "-", "x.y", "--json"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin piped")
		.write_all(br#"{"x": {"y": [1, 2]}}"#)
		.expect("stdin accepts input");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success(), "command should succeed");
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["value"], json!([1, 2]));
}

#[test]
fn malformed_document_fails_with_error_prefix() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_dashkit"))
		.args(["get", "-", "a"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child.stdin.take().expect("stdin piped").write_all(b"{not json").expect("stdin accepts input");
	let output = child.wait_with_output().expect("command finishes");

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: json:"));
}

#[test]
fn missing_file_fails_with_io_error() {
	let output = run(&["get", &fixture("does-not-exist.json"), "a"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: io:"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_dashkit")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}
