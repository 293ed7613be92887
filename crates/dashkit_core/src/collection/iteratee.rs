use crate::collection::{Callable, Key, KeySequence, PathExpr, Value, get, to_key_sequence};

/// Shorthand describing how an entry maps to a derived value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Iteratee {
	/// The entry value itself.
	#[default]
	Identity,
	/// The value at a nested path of the entry.
	Property(KeySequence),
	/// A callable invoked with `[value, key]`.
	Function(Callable),
}

impl Iteratee {
	/// Property iteratee from any path expression.
	pub fn property<'a>(path: impl Into<PathExpr<'a>>) -> Self {
		Iteratee::Property(to_key_sequence(path))
	}

	/// Derive the output for one entry.
	pub fn apply(&self, value: &Value, key: &Key) -> Value {
		match self {
			Iteratee::Identity => value.clone(),
			Iteratee::Property(path) => get(value, path),
			Iteratee::Function(callable) => callable.call(&[value.clone(), Value::from(key)]),
		}
	}

	/// Truthiness of [`Iteratee::apply`].
	pub fn test(&self, value: &Value, key: &Key) -> bool {
		match self {
			Iteratee::Identity => value.is_truthy(),
			_ => self.apply(value, key).is_truthy(),
		}
	}
}

impl From<Callable> for Iteratee {
	fn from(callable: Callable) -> Self {
		Iteratee::Function(callable)
	}
}

impl From<KeySequence> for Iteratee {
	fn from(path: KeySequence) -> Self {
		Iteratee::Property(path)
	}
}

/// The `Boolean` callable: truthiness of its first argument.
pub fn truthy() -> Callable {
	Callable::new("Boolean", 1, |args| Value::Bool(args.first().is_some_and(Value::is_truthy)))
}
