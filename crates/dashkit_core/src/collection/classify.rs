use std::fmt;

use crate::collection::{Object, Value};

/// Largest `length` an array-like value may declare.
pub const MAX_LENGTH: u64 = 9_007_199_254_740_991;

/// Structural category deciding how a value is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
	/// Native ordered sequence.
	Array,
	/// Non-callable value with a valid `length`, traversed by index.
	ArrayLike,
	/// Keyed mapping traversed in insertion order.
	PlainObject,
	/// `Undefined` or `Null`.
	Nullish,
	/// Anything else; never traversed.
	Opaque,
}

impl Classification {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Classification::Array => "array",
			Classification::ArrayLike => "array-like",
			Classification::PlainObject => "plain-object",
			Classification::Nullish => "nullish",
			Classification::Opaque => "opaque",
		}
	}

	/// Whether entries are addressed by `0..length`.
	pub fn is_indexed(self) -> bool {
		matches!(self, Classification::Array | Classification::ArrayLike)
	}
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Classify a value. Total over every input.
pub fn classify(value: &Value) -> Classification {
	match value {
		Value::Undefined | Value::Null => Classification::Nullish,
		Value::Array(_) => Classification::Array,
		Value::String(_) => Classification::ArrayLike,
		Value::Object(object) if declared_length(object).is_some() => Classification::ArrayLike,
		Value::Object(_) => Classification::PlainObject,
		Value::Bool(_) | Value::Number(_) | Value::Function(_) => Classification::Opaque,
	}
}

/// Index range of an array or array-like value.
///
/// Strings count Unicode scalar values (`char`s), not bytes or UTF-16 code units.
pub fn length_of(value: &Value) -> Option<usize> {
	match value {
		Value::Array(items) => Some(items.len()),
		Value::String(text) => Some(text.chars().count()),
		Value::Object(object) => declared_length(object),
		_ => None,
	}
}

/// Whether a value is an array or array-like.
pub fn is_array_like(value: &Value) -> bool {
	classify(value).is_indexed()
}

/// Whether a value is object-like: arrays, objects, and callables.
pub fn is_object(value: &Value) -> bool {
	matches!(value, Value::Array(_) | Value::Object(_) | Value::Function(_))
}

fn declared_length(object: &Object) -> Option<usize> {
	let Some(Value::Number(length)) = object.get("length") else {
		return None;
	};
	let length = *length;
	if !length.is_finite() || length < 0.0 || length.fract() != 0.0 || length > MAX_LENGTH as f64 {
		return None;
	}
	usize::try_from(length as u64).ok()
}
