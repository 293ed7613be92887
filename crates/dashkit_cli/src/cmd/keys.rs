use dashkit::collection::{Key, Result, to_key_sequence};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: String,
	#[arg(long)]
	pub json: bool,
}

/// Parse a path expression and print its keys.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;
	let keys = to_key_sequence(path.as_str());

	if json {
		return emit_json(&KeysJson {
			path: &path,
			canonical: keys.to_string(),
			keys: keys.iter().map(KeyJson::from).collect(),
		});
	}

	println!("path: {path}");
	println!("canonical: {keys}");
	println!("keys: {}", keys.len());
	println!("idx\tkind\tkey");
	for (position, key) in keys.iter().enumerate() {
		let row = KeyJson::from(key);
		println!("{position}\t{}\t{}", row.kind, row.key);
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct KeyJson<'a> {
	kind: &'static str,
	key: &'a Key,
}

impl<'a> From<&'a Key> for KeyJson<'a> {
	fn from(key: &'a Key) -> Self {
		let kind = match key {
			Key::Index(_) => "index",
			Key::Name(_) => "name",
		};
		Self { kind, key }
	}
}

#[derive(serde::Serialize)]
struct KeysJson<'a> {
	path: &'a str,
	canonical: String,
	keys: Vec<KeyJson<'a>>,
}
