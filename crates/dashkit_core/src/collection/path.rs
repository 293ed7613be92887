use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, Serializer};

use crate::collection::{MAX_LENGTH, Value};

/// One lookup key in a parsed path.
///
/// Keys compare by canonical text, so `Index(0)` equals `Name("0")`.
#[derive(Debug, Clone, Eq)]
pub enum Key {
	/// Zero-based element index.
	Index(usize),
	/// Named member.
	Name(Box<str>),
}

impl Key {
	/// Build a named key.
	pub fn name(name: impl Into<Box<str>>) -> Self {
		Key::Name(name.into())
	}

	/// Element index addressed by this key, if its text is a canonical index.
	pub fn as_index(&self) -> Option<usize> {
		match self {
			Key::Index(index) => Some(*index),
			Key::Name(name) => parse_index(name),
		}
	}

	/// Canonical text used for member lookup.
	pub fn as_text(&self) -> Cow<'_, str> {
		match self {
			Key::Index(index) => Cow::Owned(index.to_string()),
			Key::Name(name) => Cow::Borrowed(name),
		}
	}

	fn from_value(value: &Value) -> Self {
		match value {
			Value::Number(number) => number_key(*number),
			Value::String(text) => Key::Name(text.clone()),
			other => Key::Name(other.to_string().into_boxed_str()),
		}
	}
}

impl PartialEq for Key {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Key::Index(left), Key::Index(right)) => left == right,
			(Key::Name(left), Key::Name(right)) => left == right,
			_ => self.as_text() == other.as_text(),
		}
	}
}

impl Hash for Key {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_text().hash(state);
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.as_text())
	}
}

impl Serialize for Key {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Key::Index(index) => serializer.serialize_u64(*index as u64),
			Key::Name(name) => serializer.serialize_str(name),
		}
	}
}

impl From<usize> for Key {
	fn from(index: usize) -> Self {
		Key::Index(index)
	}
}

impl From<&str> for Key {
	fn from(name: &str) -> Self {
		Key::Name(name.into())
	}
}

impl From<String> for Key {
	fn from(name: String) -> Self {
		Key::Name(name.into_boxed_str())
	}
}

/// Parse `"0"` or a digit run without a leading zero.
pub(crate) fn parse_index(text: &str) -> Option<usize> {
	let bytes = text.as_bytes();
	if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
		return None;
	}
	if bytes.len() > 1 && bytes[0] == b'0' {
		return None;
	}
	text.parse().ok()
}

fn number_key(number: f64) -> Key {
	if number.is_finite() && !number.is_sign_negative() && number.fract() == 0.0 && number <= MAX_LENGTH as f64 {
		if let Ok(index) = usize::try_from(number as u64) {
			return Key::Index(index);
		}
	}
	Key::Name(Value::Number(number).to_string().into_boxed_str())
}

/// Ordered lookup keys parsed from a path expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeySequence {
	/// Keys in traversal order.
	pub keys: Vec<Key>,
}

#[derive(Debug, Clone, Copy)]
enum ParseState {
	Segment,
	Bracket { open: usize },
	Quoted { open: usize, quote: char },
	Escape { open: usize, quote: char },
	QuoteClosed { open: usize },
}

impl KeySequence {
	/// Parse dotted path syntax with `[index]` and `["quoted"]` selectors.
	///
	/// Parsing never fails. Empty segments are dropped, and an unterminated bracket keeps the rest
	/// of the input, starting at its `[`, as one literal key.
	pub fn parse(input: &str) -> Self {
		let mut keys = Vec::new();
		let mut buffer = String::new();
		let mut state = ParseState::Segment;

		for (at, ch) in input.char_indices() {
			state = match state {
				ParseState::Segment => match ch {
					'.' | ']' => {
						flush_segment(&mut keys, &mut buffer);
						ParseState::Segment
					}
					'[' => {
						flush_segment(&mut keys, &mut buffer);
						ParseState::Bracket { open: at }
					}
					_ => {
						buffer.push(ch);
						ParseState::Segment
					}
				},
				ParseState::Bracket { open } => match ch {
					']' => {
						flush_bracket(&mut keys, &mut buffer);
						ParseState::Segment
					}
					'"' | '\'' if buffer.is_empty() => ParseState::Quoted { open, quote: ch },
					_ => {
						buffer.push(ch);
						ParseState::Bracket { open }
					}
				},
				ParseState::Quoted { open, quote } => match ch {
					'\\' => ParseState::Escape { open, quote },
					_ if ch == quote => ParseState::QuoteClosed { open },
					_ => {
						buffer.push(ch);
						ParseState::Quoted { open, quote }
					}
				},
				ParseState::Escape { open, quote } => {
					buffer.push(ch);
					ParseState::Quoted { open, quote }
				}
				ParseState::QuoteClosed { open } => {
					if ch != ']' {
						return Self::literal_tail(input, open, keys);
					}
					keys.push(Key::Name(std::mem::take(&mut buffer).into_boxed_str()));
					ParseState::Segment
				}
			};
		}

		match state {
			ParseState::Segment => {
				flush_segment(&mut keys, &mut buffer);
				Self { keys }
			}
			ParseState::Bracket { open } | ParseState::Quoted { open, .. } | ParseState::Escape { open, .. } | ParseState::QuoteClosed { open } => {
				Self::literal_tail(input, open, keys)
			}
		}
	}

	fn literal_tail(input: &str, open: usize, mut keys: Vec<Key>) -> Self {
		tracing::trace!(path = input, at = open, "malformed bracket segment kept as literal key");
		keys.push(Key::Name(input[open..].into()));
		Self { keys }
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Whether the sequence has no keys.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Iterate keys in traversal order.
	pub fn iter(&self) -> std::slice::Iter<'_, Key> {
		self.keys.iter()
	}
}

fn flush_segment(keys: &mut Vec<Key>, buffer: &mut String) {
	if !buffer.is_empty() {
		keys.push(Key::Name(std::mem::take(buffer).into_boxed_str()));
	}
}

fn flush_bracket(keys: &mut Vec<Key>, buffer: &mut String) {
	if buffer.is_empty() {
		return;
	}
	let content = std::mem::take(buffer);
	match parse_index(&content) {
		Some(index) => keys.push(Key::Index(index)),
		None => keys.push(Key::Name(content.into_boxed_str())),
	}
}

/// Renders as a path string that parses back to an equal sequence.
impl fmt::Display for KeySequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (position, key) in self.keys.iter().enumerate() {
			match key {
				Key::Index(index) => write!(f, "[{index}]")?,
				Key::Name(name) if is_plain_segment(name) => {
					if position > 0 {
						f.write_char('.')?;
					}
					f.write_str(name)?;
				}
				Key::Name(name) => {
					f.write_str("[\"")?;
					for ch in name.chars() {
						if ch == '"' || ch == '\\' {
							f.write_char('\\')?;
						}
						f.write_char(ch)?;
					}
					f.write_str("\"]")?;
				}
			}
		}
		Ok(())
	}
}

fn is_plain_segment(name: &str) -> bool {
	!name.is_empty() && !name.contains(['.', '[', ']'])
}

impl From<Vec<Key>> for KeySequence {
	fn from(keys: Vec<Key>) -> Self {
		Self { keys }
	}
}

impl FromIterator<Key> for KeySequence {
	fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
		Self { keys: iter.into_iter().collect() }
	}
}

impl<'a> IntoIterator for &'a KeySequence {
	type Item = &'a Key;
	type IntoIter = std::slice::Iter<'a, Key>;

	fn into_iter(self) -> Self::IntoIter {
		self.keys.iter()
	}
}

/// Borrowed path expression in any accepted input form.
#[derive(Debug, Clone, Copy)]
pub enum PathExpr<'a> {
	/// Dotted/bracketed path string.
	Text(&'a str),
	/// Pre-split keys, used unchanged.
	Keys(&'a [Key]),
	/// Pre-split names, one key each.
	Names(&'a [&'a str]),
	/// Single element index.
	Index(usize),
	/// Dynamic value: strings parse, arrays split, nullish is empty, other scalars are one key.
	Value(&'a Value),
}

impl<'a> PathExpr<'a> {
	pub(crate) fn into_keys(self) -> Cow<'a, [Key]> {
		match self {
			PathExpr::Keys(keys) => Cow::Borrowed(keys),
			other => Cow::Owned(to_key_sequence(other).keys),
		}
	}
}

impl<'a> From<&'a str> for PathExpr<'a> {
	fn from(text: &'a str) -> Self {
		PathExpr::Text(text)
	}
}

impl<'a> From<&'a String> for PathExpr<'a> {
	fn from(text: &'a String) -> Self {
		PathExpr::Text(text)
	}
}

impl<'a> From<&'a [Key]> for PathExpr<'a> {
	fn from(keys: &'a [Key]) -> Self {
		PathExpr::Keys(keys)
	}
}

impl<'a> From<&'a Vec<Key>> for PathExpr<'a> {
	fn from(keys: &'a Vec<Key>) -> Self {
		PathExpr::Keys(keys)
	}
}

impl<'a> From<&'a KeySequence> for PathExpr<'a> {
	fn from(sequence: &'a KeySequence) -> Self {
		PathExpr::Keys(&sequence.keys)
	}
}

impl<'a> From<&'a [&'a str]> for PathExpr<'a> {
	fn from(names: &'a [&'a str]) -> Self {
		PathExpr::Names(names)
	}
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for PathExpr<'a> {
	fn from(names: &'a [&'a str; N]) -> Self {
		PathExpr::Names(names)
	}
}

impl From<usize> for PathExpr<'_> {
	fn from(index: usize) -> Self {
		PathExpr::Index(index)
	}
}

impl<'a> From<&'a Value> for PathExpr<'a> {
	fn from(value: &'a Value) -> Self {
		PathExpr::Value(value)
	}
}

/// Resolve any path expression into its key sequence.
pub fn to_key_sequence<'a>(path: impl Into<PathExpr<'a>>) -> KeySequence {
	match path.into() {
		PathExpr::Text(text) => KeySequence::parse(text),
		PathExpr::Keys(keys) => KeySequence { keys: keys.to_vec() },
		PathExpr::Names(names) => names.iter().map(|name| Key::name(*name)).collect(),
		PathExpr::Index(index) => KeySequence { keys: vec![Key::Index(index)] },
		PathExpr::Value(value) => match value {
			Value::Undefined | Value::Null => KeySequence::default(),
			Value::String(text) => KeySequence::parse(text),
			Value::Array(items) => items.iter().map(Key::from_value).collect(),
			other => KeySequence {
				keys: vec![Key::from_value(other)],
			},
		},
	}
}
