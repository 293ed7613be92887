use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DashError>;

/// Errors produced while loading documents into [`crate::collection::Value`] trees.
///
/// Path resolution and iteration never fail; absent targets and non-collections degrade to
/// defaults and empty results instead.
#[derive(Debug, Error)]
pub enum DashError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text was not a valid JSON document.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
