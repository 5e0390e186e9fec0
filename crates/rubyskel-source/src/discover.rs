use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SourceError};

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "rb"];

/// List the regular files directly inside `dir` whose extension is one of `extensions`.
///
/// Subdirectories are not descended into. Extensions are compared case-sensitively and the
/// result is ordered by file name so repeated runs see the same sequence.
pub fn discover_sources<S: AsRef<str>>(dir: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
	let metadata = fs::metadata(dir).map_err(|err| SourceError::io(dir, err))?;
	if !metadata.is_dir() {
		return Err(SourceError::NotADirectory(dir.to_path_buf()));
	}

	let mut files = Vec::new();
	for entry in fs::read_dir(dir).map_err(|err| SourceError::io(dir, err))? {
		let entry = entry.map_err(|err| SourceError::io(dir, err))?;
		let path = entry.path();
		if !path.is_file() {
			continue;
		}
		let matches = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| extensions.iter().any(|wanted| wanted.as_ref() == ext));
		if matches {
			files.push(path);
		}
	}

	files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
	Ok(files)
}

/// Name of `path` relative to `dir`, falling back to the full path.
pub fn relative_name(dir: &Path, path: &Path) -> String {
	path.strip_prefix(dir)
		.unwrap_or(path)
		.to_string_lossy()
		.into_owned()
}
