//! Core library for rubyskel, providing the main API for outlining Ruby sources.
//!
//! This crate provides the high-level `Rubyskel` API which orchestrates source discovery,
//! scanning and rendering. It is designed to be UI-agnostic and can be used by any frontend
//! (CLI, editor plugin, language server, etc.).

/// Error helpers for the core API.
pub mod error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use rubyskel_model::{Keyed, Method, Namespace, NamespaceKind, TopLevel};
pub use rubyskel_render::Renderer;
use rubyskel_source::{
	DEFAULT_EXTENSIONS, discover_sources, parse_file, parser_for, relative_name,
};
use tracing::{debug, info};

pub use crate::error::{Result, RubyskelError};

/// Rubyskel generates a documented, body-less Ruby skeleton of a source directory.
///
/// Every `.rb` and `.c` file directly inside the directory is scanned for modules, classes and
/// methods. The result is a single stub file that editors can index for structure without
/// parsing the original sources. Files are scanned and rendered one at a time, in file name
/// order.
#[derive(Debug, Clone)]
pub struct Rubyskel {
	/// Renderer used for each file and for the closing built-in tables.
	renderer: Renderer,

	/// File extensions considered during discovery.
	extensions: Vec<String>,
}

impl Default for Rubyskel {
	fn default() -> Self {
		Self::new()
	}
}

impl Rubyskel {
	/// Creates a new Rubyskel instance with default configuration.
	pub fn new() -> Self {
		Self {
			renderer: Renderer::default(),
			extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
		}
	}

	/// Enables or disables the built-in globals and constants tables at the end of the output.
	pub fn with_builtins(mut self, builtins: bool) -> Self {
		self.renderer = self.renderer.with_builtins(builtins);
		self
	}

	/// Replaces the set of file extensions considered during discovery.
	pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.extensions = extensions.into_iter().map(Into::into).collect();
		self
	}

	/// Source files that a run over `dir` would visit, in visiting order.
	pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
		Ok(discover_sources(dir, &self.extensions)?)
	}

	/// Scan every discovered file. Files without a scanner, or that cannot be read, are `None`.
	pub fn parse_dir(&self, dir: &Path) -> Result<Vec<Option<TopLevel>>> {
		Ok(self
			.discover(dir)?
			.iter()
			.map(|path| parse_file(path, &relative_name(dir, path)))
			.collect())
	}

	/// Stream the skeleton of `dir` into `out`.
	///
	/// Each file is scanned and written before the next one is read, then the built-in tables
	/// close the output.
	pub fn render_to<W: Write>(&self, dir: &Path, out: &mut W) -> Result<()> {
		let files = self.discover(dir)?;
		self.render_files(dir, &files, out)
	}

	fn render_files<W: Write>(&self, dir: &Path, files: &[PathBuf], out: &mut W) -> Result<()> {
		info!("Generating documentation. Please be patient, this may take a while.");
		for path in files {
			if let Some(top_level) = parse_file(path, &relative_name(dir, path)) {
				if top_level.is_empty() {
					debug!("No definitions in {}", top_level.name);
				}
				out.write_all(self.renderer.render_top_level(&top_level).as_bytes())?;
			}
		}
		out.write_all(self.renderer.render_trailer().as_bytes())?;
		Ok(())
	}

	/// Render the skeleton of `dir` into a string.
	pub fn render(&self, dir: &Path) -> Result<String> {
		let top_levels = self.parse_dir(dir)?;
		Ok(self.renderer.render(top_levels.iter().map(Option::as_ref)))
	}

	/// Write the skeleton of `dir` to the file at `output`, replacing any existing content.
	///
	/// The input directory is checked before the output file is created, so a bad input path
	/// leaves `output` untouched.
	pub fn write(&self, dir: &Path, output: &Path) -> Result<()> {
		let files = self.discover(dir)?;
		let mut out = BufWriter::new(File::create(output)?);
		self.render_files(dir, &files, &mut out)?;
		out.flush()?;
		Ok(())
	}

	/// Outline a single in-memory source, choosing the scanner from `name`'s extension.
	///
	/// Returns `None` when no scanner handles the file. The built-in tables are never appended.
	pub fn render_source(&self, name: &str, content: &str) -> Option<String> {
		let parser = parser_for(Path::new(name))?;
		let top_level = parser.parse(name, content);
		Some(self.renderer.render_top_level(&top_level))
	}

	/// Returns a pretty-printed JSON dump of the scanned models, one entry per discovered file.
	pub fn raw_json(&self, dir: &Path) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.parse_dir(dir)?)?)
	}
}
