use std::path::PathBuf;

use dashkit::collection::{Key, Result, Value, at, from_json_str, has, lookup, to_key_sequence};

use crate::cmd::util::{emit_json, load_input, render};

#[derive(clap::Args)]
pub struct GetArgs {
	pub file: PathBuf,
	pub path: String,
	/// JSON literal returned when the path is missing.
	#[arg(long)]
	pub default: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(clap::Args)]
pub struct AtArgs {
	pub file: PathBuf,
	#[arg(required = true)]
	pub paths: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Resolve one path against the input document.
pub fn run_get(args: GetArgs) -> Result<()> {
	let GetArgs { file, path, default, json } = args;

	let root = load_input(&file)?;
	let default = match default.as_deref() {
		Some(text) => from_json_str(text)?,
		None => Value::Undefined,
	};

	let keys = to_key_sequence(path.as_str());
	let found = lookup(&root, &keys);
	let is_found = found.is_found();
	let value = found.unwrap_or(default);
	tracing::debug!(path = %path, keys = keys.len(), found = is_found, "resolved path");

	if json {
		return emit_json(&GetJson {
			path: &path,
			keys: &keys.keys,
			found: is_found,
			value: &value,
		});
	}

	println!("{}", render(&value));
	Ok(())
}

/// Resolve several paths, one output per path.
pub fn run_at(args: AtArgs) -> Result<()> {
	let AtArgs { file, paths, json } = args;

	let root = load_input(&file)?;
	let values = at(&root, &paths);

	if json {
		let results = paths
			.iter()
			.zip(&values)
			.map(|(path, value)| AtEntryJson {
				path,
				found: has(&root, path),
				value,
			})
			.collect();
		return emit_json(&AtJson { results });
	}

	for (path, value) in paths.iter().zip(&values) {
		println!("{path}\t{}", render(value));
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct GetJson<'a> {
	path: &'a str,
	keys: &'a [Key],
	found: bool,
	value: &'a Value,
}

#[derive(serde::Serialize)]
struct AtEntryJson<'a> {
	path: &'a str,
	found: bool,
	value: &'a Value,
}

#[derive(serde::Serialize)]
struct AtJson<'a> {
	results: Vec<AtEntryJson<'a>>,
}
