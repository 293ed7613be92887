use std::io;
use std::path::Path;

use dashkit::collection::{Result, Value, from_json_reader, open_json};

/// Load the input document; `-` reads stdin.
pub(crate) fn load_input(path: &Path) -> Result<Value> {
	if path == Path::new("-") {
		tracing::debug!("reading json document from stdin");
		return from_json_reader(io::stdin().lock());
	}
	open_json(path)
}

/// Render a value as compact JSON, `undefined` for the absent marker.
pub(crate) fn render(value: &Value) -> String {
	match value {
		Value::Undefined => "undefined".to_owned(),
		other => serde_json::to_string(other).unwrap_or_else(|_| "null".to_owned()),
	}
}

/// Print one structured JSON document on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
