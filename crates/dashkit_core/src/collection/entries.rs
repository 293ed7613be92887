use std::borrow::Cow;
use std::iter::Enumerate;
use std::slice;
use std::str::Chars;

use crate::collection::{Classification, Key, Object, Value, classify, length_of};

/// Ordered `(key, value)` entries of one collection.
///
/// One variant per traversable shape; nullish and opaque values yield nothing.
#[derive(Debug)]
pub enum Entries<'a> {
	/// Array elements by ascending index.
	Array(Enumerate<slice::Iter<'a, Value>>),
	/// String characters by ascending index.
	Chars(Enumerate<Chars<'a>>),
	/// Indexed members `"0"..length` of an object declaring a `length`.
	Indexed {
		/// Source object.
		object: &'a Object,
		/// Next index to yield.
		next: usize,
		/// Declared length.
		len: usize,
	},
	/// Object members in insertion order.
	Object(indexmap::map::Iter<'a, String, Value>),
	/// No entries.
	Empty,
}

/// Ordered entries of `collection` according to its classification.
///
/// An array-like object yields one entry per declared index, up to [`MAX_LENGTH`](crate::collection::MAX_LENGTH),
/// whether or not the member exists. The iterator is lazy, so callers over untrusted input should
/// check [`length_of`] first or stop early.
pub fn entries(collection: &Value) -> Entries<'_> {
	match (classify(collection), collection) {
		(Classification::Array, Value::Array(items)) => Entries::Array(items.iter().enumerate()),
		(Classification::ArrayLike, Value::String(text)) => Entries::Chars(text.chars().enumerate()),
		(Classification::ArrayLike, Value::Object(object)) => Entries::Indexed {
			object,
			next: 0,
			len: length_of(collection).unwrap_or(0),
		},
		(Classification::PlainObject, Value::Object(object)) => Entries::Object(object.iter()),
		_ => Entries::Empty,
	}
}

impl<'a> Iterator for Entries<'a> {
	type Item = (Key, Cow<'a, Value>);

	fn next(&mut self) -> Option<Self::Item> {
		match self {
			Entries::Array(items) => items.next().map(|(index, item)| (Key::Index(index), Cow::Borrowed(item))),
			Entries::Chars(chars) => chars.next().map(|(index, ch)| (Key::Index(index), Cow::Owned(Value::from(ch)))),
			Entries::Indexed { object, next, len } => {
				if *next >= *len {
					return None;
				}
				let object: &'a Object = *object;
				let index = *next;
				*next += 1;
				let item = object
					.get(index.to_string().as_str())
					.map_or(Cow::Owned(Value::Undefined), Cow::Borrowed);
				Some((Key::Index(index), item))
			}
			Entries::Object(members) => members.next().map(|(name, item)| (Key::name(name.as_str()), Cow::Borrowed(item))),
			Entries::Empty => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self {
			Entries::Array(items) => items.size_hint(),
			Entries::Chars(chars) => chars.size_hint(),
			Entries::Indexed { next, len, .. } => {
				let left = len.saturating_sub(*next);
				(left, Some(left))
			}
			Entries::Object(members) => members.size_hint(),
			Entries::Empty => (0, Some(0)),
		}
	}
}
