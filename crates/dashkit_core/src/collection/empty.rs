use crate::collection::{Classification, Value, classify, size};

/// Whether a value has no contents.
///
/// Nullish values and opaque scalars are always empty, so `1` and `true` count as empty.
pub fn is_empty(value: &Value) -> bool {
	match classify(value) {
		Classification::Nullish | Classification::Opaque => true,
		Classification::Array | Classification::ArrayLike | Classification::PlainObject => size(value) == 0,
	}
}
