use std::fmt;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the rubyskel-core API.
#[derive(Debug)]
pub enum RubyskelError {
	/// Errors returned while discovering or reading sources.
	Source(rubyskel_source::SourceError),
	/// Writing the skeleton to its destination failed.
	Io(std::io::Error),
	/// Failed to encode the model as JSON.
	Serialization(SerdeError),
}

impl fmt::Display for RubyskelError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Source(err) => write!(f, "{err}"),
			Self::Io(err) => write!(f, "failed to write output: {err}"),
			Self::Serialization(err) => write!(f, "{err}"),
		}
	}
}

impl std::error::Error for RubyskelError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Source(err) => Some(err),
			Self::Io(err) => Some(err),
			Self::Serialization(err) => Some(err),
		}
	}
}

impl From<rubyskel_source::SourceError> for RubyskelError {
	fn from(err: rubyskel_source::SourceError) -> Self {
		Self::Source(err)
	}
}

impl From<std::io::Error> for RubyskelError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<SerdeError> for RubyskelError {
	fn from(err: SerdeError) -> Self {
		Self::Serialization(err)
	}
}

/// Result type returned by the rubyskel-core library.
pub type Result<T> = std::result::Result<T, RubyskelError>;
