use std::path::PathBuf;

use dashkit::collection::{Iteratee, Result, Value, classify, count_by, every, filter, get, map, size};

use crate::cmd::util::{emit_json, load_input, render};

/// Iteration operation selected by the subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	Map,
	Filter,
	Every,
	CountBy,
}

impl Op {
	fn name(self) -> &'static str {
		match self {
			Op::Map => "map",
			Op::Filter => "filter",
			Op::Every => "every",
			Op::CountBy => "count-by",
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	/// Path selecting the collection inside the document.
	#[arg(long)]
	pub at: Option<String>,
	/// Property path applied to each entry; the entry itself when absent.
	#[arg(long)]
	pub by: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Run one iteration operation over the selected collection.
pub fn run(op: Op, args: Args) -> Result<()> {
	let Args { file, at, by, json } = args;

	let root = load_input(&file)?;
	let collection = match at.as_deref() {
		Some(path) => get(&root, path),
		None => root,
	};
	let iteratee = by.as_deref().map_or(Iteratee::Identity, |path| Iteratee::property(path));

	let classification = classify(&collection);
	let entries = size(&collection);
	tracing::debug!(op = op.name(), %classification, entries, "iterating collection");

	let result = evaluate(op, &collection, &iteratee);

	if json {
		return emit_json(&IterateJson {
			op: op.name(),
			at: at.as_deref(),
			by: by.as_deref(),
			classification: classification.as_str(),
			entries,
			result: &result,
		});
	}

	println!("{}", render(&result));
	Ok(())
}

pub(crate) fn evaluate(op: Op, collection: &Value, iteratee: &Iteratee) -> Value {
	match op {
		Op::Map => Value::Array(map(collection, |value, key| iteratee.apply(value, key))),
		Op::Filter => Value::Array(filter(collection, |value, key| iteratee.test(value, key))),
		Op::Every => Value::Bool(every(collection, |value, key| iteratee.test(value, key))),
		Op::CountBy => count_by(collection, |value, key| iteratee.apply(value, key))
			.into_iter()
			.map(|(group, count)| (group, Value::from(count)))
			.collect::<dashkit::collection::Object>()
			.into(),
	}
}

#[derive(serde::Serialize)]
struct IterateJson<'a> {
	op: &'static str,
	at: Option<&'a str>,
	by: Option<&'a str>,
	classification: &'static str,
	entries: usize,
	result: &'a Value,
}
