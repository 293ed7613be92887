//! Shared test helpers for workspace crates.

use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and parse a JSON fixture under `<workspace>/fixtures`.
pub fn load_fixture(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} should be valid json: {err}", path.display()))
}

/// Counts invocations of a visitor or predicate under test.
#[derive(Debug, Default)]
pub struct CallCounter {
	calls: Cell<usize>,
}

impl CallCounter {
	/// Create a counter starting at zero.
	pub fn new() -> Self {
		Self::default()
	}

	/// Record one call.
	pub fn hit(&self) {
		self.calls.set(self.calls.get() + 1);
	}

	/// Record one call and pass `value` through.
	pub fn tap<T>(&self, value: T) -> T {
		self.hit();
		value
	}

	/// Number of calls recorded so far.
	pub fn calls(&self) -> usize {
		self.calls.get()
	}
}
