use std::borrow::Cow;

use crate::collection::{Key, PathExpr, Value};

/// Outcome of one traversal step or a whole path walk.
///
/// A stored `Null`/`Undefined` is `Found`; only an absent member is `Missing`.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
	/// The member exists. Borrowed from the root where possible.
	Found(Cow<'a, Value>),
	/// Some segment had no addressable member.
	Missing,
}

impl<'a> Lookup<'a> {
	/// Whether the walk reached its final key.
	pub fn is_found(&self) -> bool {
		matches!(self, Lookup::Found(_))
	}

	/// Borrow the found value.
	pub fn value(&self) -> Option<&Value> {
		match self {
			Lookup::Found(value) => Some(value),
			Lookup::Missing => None,
		}
	}

	/// Take the found value, cloning borrowed data.
	pub fn into_value(self) -> Option<Value> {
		match self {
			Lookup::Found(value) => Some(value.into_owned()),
			Lookup::Missing => None,
		}
	}

	/// Take the found value or substitute `default` when missing.
	pub fn unwrap_or(self, default: Value) -> Value {
		self.into_value().unwrap_or(default)
	}

	fn detach(self) -> Lookup<'static> {
		match self {
			Lookup::Found(value) => Lookup::Found(Cow::Owned(value.into_owned())),
			Lookup::Missing => Lookup::Missing,
		}
	}
}

/// Look up one addressable member of `value`.
///
/// String indices and `length` are in `char`s.
pub fn member<'a>(value: &'a Value, key: &Key) -> Lookup<'a> {
	match value {
		Value::Array(items) => match key.as_index() {
			Some(index) => items.get(index).map_or(Lookup::Missing, |item| Lookup::Found(Cow::Borrowed(item))),
			None if is_length_key(key) => Lookup::Found(Cow::Owned(Value::from(items.len()))),
			None => Lookup::Missing,
		},
		Value::String(text) => match key.as_index() {
			Some(index) => text
				.chars()
				.nth(index)
				.map_or(Lookup::Missing, |ch| Lookup::Found(Cow::Owned(Value::from(ch)))),
			None if is_length_key(key) => Lookup::Found(Cow::Owned(Value::from(text.chars().count()))),
			None => Lookup::Missing,
		},
		Value::Object(object) => object
			.get(&*key.as_text())
			.map_or(Lookup::Missing, |item| Lookup::Found(Cow::Borrowed(item))),
		Value::Function(callable) => match &*key.as_text() {
			"length" => Lookup::Found(Cow::Owned(Value::from(callable.arity()))),
			"name" => Lookup::Found(Cow::Owned(Value::from(callable.name()))),
			_ => Lookup::Missing,
		},
		Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) => Lookup::Missing,
	}
}

fn is_length_key(key: &Key) -> bool {
	matches!(key, Key::Name(name) if &**name == "length")
}

/// Walk `path` from `root`, stopping at the first missing member.
///
/// An empty path finds the root itself unless the root is nullish.
pub fn lookup<'a, 'p>(root: &'a Value, path: impl Into<PathExpr<'p>>) -> Lookup<'a> {
	let keys = path.into().into_keys();
	if keys.is_empty() && root.is_nullish() {
		return Lookup::Missing;
	}

	let mut current = Cow::Borrowed(root);
	for (step, key) in keys.iter().enumerate() {
		let next = match &current {
			Cow::Borrowed(value) => member(*value, key),
			Cow::Owned(value) => member(value, key).detach(),
		};
		match next {
			Lookup::Found(value) => current = value,
			Lookup::Missing => {
				tracing::trace!(step, key = %key, "path walk stopped at missing member");
				return Lookup::Missing;
			}
		}
	}

	Lookup::Found(current)
}

/// Resolve `path`, yielding `Undefined` when any segment is missing.
pub fn get<'p>(root: &Value, path: impl Into<PathExpr<'p>>) -> Value {
	get_or(root, path, Value::Undefined)
}

/// Resolve `path`, yielding `default` only when a segment is missing.
///
/// A found nullish value is returned as-is.
pub fn get_or<'p>(root: &Value, path: impl Into<PathExpr<'p>>, default: Value) -> Value {
	lookup(root, path).unwrap_or(default)
}

/// Whether `path` resolves to a member, including stored nullish members.
pub fn has<'p>(root: &Value, path: impl Into<PathExpr<'p>>) -> bool {
	lookup(root, path).is_found()
}

/// Resolve each path in order, one output per path.
pub fn at<'p, I, P>(root: &Value, paths: I) -> Vec<Value>
where
	I: IntoIterator<Item = P>,
	P: Into<PathExpr<'p>>,
{
	paths.into_iter().map(|path| get(root, path)).collect()
}
