mod classify;
mod empty;
mod entries;
mod error;
mod iter;
mod iteratee;
mod path;
mod resolve;
mod source;
mod value;

/// Structural classification of values.
pub use classify::{Classification, MAX_LENGTH, classify, is_array_like, is_object, length_of};
/// Emptiness check.
pub use empty::is_empty;
/// Ordered entries adapter shared by all iteration operations.
pub use entries::{Entries, entries};
/// Error and result aliases.
pub use error::{DashError, Result};
/// Collection iteration operations.
pub use iter::{count_by, every, filter, for_each_entry, map, reduce, size};
/// Iteratee shorthand for property and callable predicates.
pub use iteratee::{Iteratee, truthy};
/// Path expression and key sequence types.
pub use path::{Key, KeySequence, PathExpr, to_key_sequence};
/// Tolerant path traversal entry points.
pub use resolve::{Lookup, at, get, get_or, has, lookup, member};
/// JSON document loading.
pub use source::{from_json_reader, from_json_str, open_json};
/// Dynamic runtime value types.
pub use value::{Callable, Object, Value};
