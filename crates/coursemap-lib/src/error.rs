//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	/// The identifier is not a course in the catalog or a node in the graph.
	#[error("identifier not found: {0}")]
	NotFound(String),
	/// A catalog was given the same identifier twice.
	#[error("identifier already exists: {0}")]
	AlreadyExists(String),
}
