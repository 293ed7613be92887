//! Public library API for path resolution and uniform iteration over dynamic values.

/// Value model, type classification, path resolution, collection iteration, and emptiness checks.
pub mod collection;
