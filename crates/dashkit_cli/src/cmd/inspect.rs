use std::path::PathBuf;

use dashkit::collection::{Result, Value, classify, is_array_like, is_empty, is_object, length_of, lookup, size};

use crate::cmd::util::{emit_json, load_input, render};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub at: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Report the classification and traversal facts of one value.
pub fn run(args: Args) -> Result<()> {
	let Args { file, at, json } = args;

	let root = load_input(&file)?;
	let (found, target) = match at.as_deref() {
		Some(path) => {
			let hit = lookup(&root, path);
			(hit.is_found(), hit.into_value().unwrap_or_default())
		}
		None => (true, root),
	};

	let report = InspectJson {
		at: at.as_deref(),
		found,
		type_name: target.type_name(),
		classification: classify(&target).as_str(),
		length: length_of(&target),
		size: size(&target),
		empty: is_empty(&target),
		array_like: is_array_like(&target),
		object: is_object(&target),
		value: &target,
	};

	if json {
		return emit_json(&report);
	}

	println!("at: {}", report.at.unwrap_or("-"));
	println!("found: {}", report.found);
	println!("type: {}", report.type_name);
	println!("classification: {}", report.classification);
	match report.length {
		Some(length) => println!("length: {length}"),
		None => println!("length: -"),
	}
	println!("size: {}", report.size);
	println!("empty: {}", report.empty);
	println!("array_like: {}", report.array_like);
	println!("object: {}", report.object);
	println!("value: {}", render(report.value));
	Ok(())
}

#[derive(serde::Serialize)]
struct InspectJson<'a> {
	at: Option<&'a str>,
	found: bool,
	#[serde(rename = "type")]
	type_name: &'static str,
	classification: &'static str,
	length: Option<usize>,
	size: usize,
	empty: bool,
	array_like: bool,
	object: bool,
	value: &'a Value,
}
