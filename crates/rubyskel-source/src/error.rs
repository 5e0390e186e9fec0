use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while discovering or reading source files.
#[derive(Debug, Error)]
pub enum SourceError {
	/// Reading a directory or file failed.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Path that could not be read.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: std::io::Error,
	},
	/// The input path exists but is not a directory.
	#[error("not a directory: {}", .0.display())]
	NotADirectory(PathBuf),
}

impl SourceError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

/// Result type returned by rubyskel-source helpers.
pub type Result<T> = std::result::Result<T, SourceError>;
