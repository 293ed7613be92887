use std::ops::ControlFlow;

use indexmap::IndexMap;

use crate::collection::{Classification, Key, Value, classify, entries, length_of};

/// Visit every entry of `collection` in traversal order.
///
/// The visitor receives `(value, key, collection)` and may return `ControlFlow::Break` to stop
/// early. Nullish and opaque collections are visited zero times. Array-like objects are visited
/// once per declared index, so a large `length` means that many visits.
pub fn for_each_entry<F>(collection: &Value, mut visitor: F)
where
	F: FnMut(&Value, &Key, &Value) -> ControlFlow<()>,
{
	for (key, value) in entries(collection) {
		if visitor(&*value, &key, collection).is_break() {
			break;
		}
	}
}

/// Collect `iteratee(value, key)` for every entry, in traversal order.
///
/// Plain objects map to a sequence too, never to an object.
pub fn map<T, F>(collection: &Value, mut iteratee: F) -> Vec<T>
where
	F: FnMut(&Value, &Key) -> T,
{
	let mut out = Vec::new();
	for_each_entry(collection, |value, key, _| {
		out.push(iteratee(value, key));
		ControlFlow::Continue(())
	});
	out
}

/// Collect the entry values accepted by `predicate`.
pub fn filter<F>(collection: &Value, mut predicate: F) -> Vec<Value>
where
	F: FnMut(&Value, &Key) -> bool,
{
	let mut out = Vec::new();
	for_each_entry(collection, |value, key, _| {
		if predicate(value, key) {
			out.push(value.clone());
		}
		ControlFlow::Continue(())
	});
	out
}

/// Whether `predicate` holds for every entry. Stops at the first failure.
pub fn every<F>(collection: &Value, mut predicate: F) -> bool
where
	F: FnMut(&Value, &Key) -> bool,
{
	let mut all = true;
	for_each_entry(collection, |value, key, _| {
		if predicate(value, key) {
			ControlFlow::Continue(())
		} else {
			all = false;
			ControlFlow::Break(())
		}
	});
	all
}

/// Fold entries into an accumulator seeded with `initial`.
pub fn reduce<A, F>(collection: &Value, initial: A, mut reducer: F) -> A
where
	F: FnMut(A, &Value, &Key) -> A,
{
	entries(collection).fold(initial, |acc, (key, value)| reducer(acc, &*value, &key))
}

/// Count entries by the string form of `iteratee(value, key)`, in first-seen key order.
pub fn count_by<F>(collection: &Value, mut iteratee: F) -> IndexMap<String, usize>
where
	F: FnMut(&Value, &Key) -> Value,
{
	let mut counts = IndexMap::new();
	for_each_entry(collection, |value, key, _| {
		*counts.entry(iteratee(value, key).to_string()).or_insert(0) += 1;
		ControlFlow::Continue(())
	});
	counts
}

/// Entry count: length for arrays and array-likes, own keys for plain objects, zero otherwise.
pub fn size(collection: &Value) -> usize {
	match (classify(collection), collection) {
		(Classification::Array | Classification::ArrayLike, _) => length_of(collection).unwrap_or(0),
		(Classification::PlainObject, Value::Object(object)) => object.len(),
		_ => 0,
	}
}
