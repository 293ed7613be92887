use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::collection::Key;

/// Insertion-ordered keyed mapping.
pub type Object = IndexMap<String, Value>;

/// Dynamic runtime value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Not-yet-assigned absence marker.
	#[default]
	Undefined,
	/// Explicit no-value marker.
	Null,
	/// Boolean.
	Bool(bool),
	/// Double-precision number, integral or not.
	Number(f64),
	/// Text, indexed by `char`.
	String(Box<str>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Keyed mapping in insertion order.
	Object(Object),
	/// Callable value; opaque to iteration.
	Function(Callable),
}

/// Named callable value with a declared arity.
#[derive(Clone)]
pub struct Callable {
	name: Box<str>,
	arity: usize,
	body: Rc<dyn Fn(&[Value]) -> Value>,
}

impl Callable {
	/// Wrap a closure as a callable value.
	pub fn new<F>(name: impl Into<Box<str>>, arity: usize, body: F) -> Self
	where
		F: Fn(&[Value]) -> Value + 'static,
	{
		Self {
			name: name.into(),
			arity,
			body: Rc::new(body),
		}
	}

	/// Declared name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared parameter count, exposed as the `length` member.
	pub fn arity(&self) -> usize {
		self.arity
	}

	/// Invoke the body with positional arguments.
	pub fn call(&self, args: &[Value]) -> Value {
		(self.body)(args)
	}
}

impl fmt::Debug for Callable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callable")
			.field("name", &self.name)
			.field("arity", &self.arity)
			.finish_non_exhaustive()
	}
}

impl PartialEq for Callable {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.body, &other.body)
	}
}

impl Value {
	/// Whether this is `Undefined` or `Null`.
	pub fn is_nullish(&self) -> bool {
		matches!(self, Value::Undefined | Value::Null)
	}

	/// Truthiness used by predicates: nullish, `false`, `0`, `NaN` and `""` are falsy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Undefined | Value::Null => false,
			Value::Bool(flag) => *flag,
			Value::Number(number) => *number != 0.0 && !number.is_nan(),
			Value::String(text) => !text.is_empty(),
			Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
		}
	}

	/// Borrow the boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(flag) => Some(*flag),
			_ => None,
		}
	}

	/// Borrow the number payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(text) => Some(text),
			_ => None,
		}
	}

	/// Borrow the array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the object members.
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(object) => Some(object),
			_ => None,
		}
	}

	/// Borrow the callable.
	pub fn as_callable(&self) -> Option<&Callable> {
		match self {
			Value::Function(callable) => Some(callable),
			_ => None,
		}
	}

	/// Runtime type label.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Undefined => "undefined",
			Value::Null => "null",
			Value::Bool(_) => "boolean",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
			Value::Function(_) => "function",
		}
	}
}

/// String conversion: nullish renders empty, arrays join with `,`, `-0` keeps its sign.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined | Value::Null => Ok(()),
			Value::Bool(flag) => write!(f, "{flag}"),
			Value::Number(number) => write_number(*number, f),
			Value::String(text) => f.write_str(text),
			Value::Array(items) => {
				for (position, item) in items.iter().enumerate() {
					if position > 0 {
						f.write_str(",")?;
					}
					write!(f, "{item}")?;
				}
				Ok(())
			}
			Value::Object(_) => f.write_str("[object Object]"),
			Value::Function(callable) => write!(f, "function {}() {{ [native code] }}", callable.name()),
		}
	}
}

fn write_number(number: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	if number.is_nan() {
		return f.write_str("NaN");
	}
	if number.is_infinite() {
		return f.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" });
	}
	if number == 0.0 {
		return f.write_str(if number.is_sign_negative() { "-0" } else { "0" });
	}

	let magnitude = number.abs();
	if magnitude >= 1e21 || magnitude < 1e-6 {
		let formatted = format!("{number:e}");
		return match formatted.split_once('e') {
			Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{mantissa}e+{exponent}"),
			_ => f.write_str(&formatted),
		};
	}

	write!(f, "{number}")
}

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Value::Undefined | Value::Null | Value::Function(_) => serializer.serialize_none(),
			Value::Bool(flag) => serializer.serialize_bool(*flag),
			Value::Number(number) => {
				// `i64::MAX as f64` and `u64::MAX as f64` round up to 2^63 and 2^64, so both bounds are exclusive.
				if !number.is_finite() {
					serializer.serialize_none()
				} else if number.fract() == 0.0 && *number >= i64::MIN as f64 && *number < i64::MAX as f64 {
					serializer.serialize_i64(*number as i64)
				} else if number.fract() == 0.0 && *number > 0.0 && *number < u64::MAX as f64 {
					serializer.serialize_u64(*number as u64)
				} else {
					serializer.serialize_f64(*number)
				}
			}
			Value::String(text) => serializer.serialize_str(text),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Object(object) => {
				let mut map = serializer.serialize_map(Some(object.len()))?;
				for (name, item) in object {
					map.serialize_entry(name, item)?;
				}
				map.end()
			}
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(flag) => Value::Bool(flag),
			serde_json::Value::Number(number) => Value::Number(number.as_f64().unwrap_or(f64::NAN)),
			serde_json::Value::String(text) => Value::String(text.into_boxed_str()),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(members) => Value::Object(members.into_iter().map(|(name, item)| (name, Value::from(item))).collect()),
		}
	}
}

impl From<bool> for Value {
	fn from(flag: bool) -> Self {
		Value::Bool(flag)
	}
}

impl From<f64> for Value {
	fn from(number: f64) -> Self {
		Value::Number(number)
	}
}

impl From<i32> for Value {
	fn from(number: i32) -> Self {
		Value::Number(f64::from(number))
	}
}

impl From<i64> for Value {
	fn from(number: i64) -> Self {
		Value::Number(number as f64)
	}
}

impl From<u32> for Value {
	fn from(number: u32) -> Self {
		Value::Number(f64::from(number))
	}
}

impl From<usize> for Value {
	fn from(number: usize) -> Self {
		Value::Number(number as f64)
	}
}

impl From<char> for Value {
	fn from(ch: char) -> Self {
		Value::String(ch.to_string().into_boxed_str())
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::String(text.into())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Value::String(text.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Array(items)
	}
}

impl From<Object> for Value {
	fn from(object: Object) -> Self {
		Value::Object(object)
	}
}

impl From<Callable> for Value {
	fn from(callable: Callable) -> Self {
		Value::Function(callable)
	}
}

impl From<&Key> for Value {
	fn from(key: &Key) -> Self {
		match key {
			Key::Index(index) => Value::from(*index),
			Key::Name(name) => Value::String(name.clone()),
		}
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Value::Array(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests;
