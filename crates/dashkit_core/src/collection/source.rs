use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::collection::{Result, Value};

/// Parse a JSON document, keeping object member order.
pub fn from_json_str(text: &str) -> Result<Value> {
	let document: serde_json::Value = serde_json::from_str(text)?;
	Ok(Value::from(document))
}

/// Parse a JSON document from a reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Value> {
	let document: serde_json::Value = serde_json::from_reader(reader)?;
	Ok(Value::from(document))
}

/// Open and parse a JSON document file.
pub fn open_json(path: impl AsRef<Path>) -> Result<Value> {
	let path = path.as_ref();
	tracing::debug!(path = %path.display(), "loading json document");
	let file = File::open(path)?;
	from_json_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
	use dashkit_testkit::fixture_path;

	use crate::collection::{DashError, Value, from_json_reader, from_json_str, get, open_json};

	#[test]
	fn object_member_order_follows_document() {
		let value = from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).expect("json parses");
		let names: Vec<&str> = value.as_object().expect("object").keys().map(String::as_str).collect();
		assert_eq!(names, ["z", "a", "m"]);
	}

	#[test]
	fn reader_input_matches_text_input() {
		let text = r#"{"a": [{"b": {"c": 3}}]}"#;
		let from_reader = from_json_reader(text.as_bytes()).expect("json parses");
		assert_eq!(from_reader, from_json_str(text).expect("json parses"));
	}

	#[test]
	fn malformed_text_reports_json_error() {
		let err = from_json_str("{\"a\": ").expect_err("truncated document should fail");
		assert!(matches!(err, DashError::Json(_)), "expected json error, got {err:?}");
	}

	#[test]
	fn missing_file_reports_io_error() {
		let err = open_json(fixture_path("does-not-exist.json")).expect_err("missing file should fail");
		assert!(matches!(err, DashError::Io(_)), "expected io error, got {err:?}");
	}

	#[test]
	fn fixture_file_opens() {
		let users = open_json(fixture_path("users.json")).expect("fixture opens");
		assert_eq!(get(&users, "[0].user"), Value::from("barney"));
	}
}
