use std::fs;
use std::path::Path;

use rubyskel_model::TopLevel;
use tracing::{debug, info, warn};
use tree_sitter::{Language, Node, Parser, Tree};

/// Scanner for C extension sources.
mod c;
/// Comment helpers shared by the scanners.
mod comments;
/// Scanner for Ruby sources.
mod ruby;

pub use c::CExtParser;
pub use ruby::RubyParser;

/// Turns the text of one source file into a documentation model.
pub trait SourceParser {
	/// Scan `content` into the model for the file called `name`.
	fn parse(&self, name: &str, content: &str) -> TopLevel;
}

/// Pick the scanner for a file by its extension, or `None` when no scanner handles it.
pub fn parser_for(path: &Path) -> Option<Box<dyn SourceParser>> {
	match path.extension().and_then(|ext| ext.to_str()) {
		Some("rb") => Some(Box::new(RubyParser)),
		Some("c") => Some(Box::new(CExtParser)),
		_ => None,
	}
}

/// Parse `content` with `language`, logging and returning `None` when tree-sitter gives up.
fn syntax_tree(language: Language, name: &str, content: &str) -> Option<Tree> {
	let mut parser = Parser::new();
	if let Err(err) = parser.set_language(&language) {
		warn!("Grammar unavailable for {name}: {err}");
		return None;
	}
	let tree = parser.parse(content, None);
	if tree.is_none() {
		warn!("Failed to parse {name}");
	}
	tree
}

/// Source text covered by `node`.
fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
	source.get(node.byte_range()).unwrap_or("")
}

/// Read and scan one file.
///
/// Returns `None` when the file has no scanner or cannot be read as UTF-8 text; such files are
/// simply left out of the output.
pub fn parse_file(path: &Path, name: &str) -> Option<TopLevel> {
	let Some(parser) = parser_for(path) else {
		debug!("No parser for {name}, skipping");
		return None;
	};

	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(err) => {
			warn!("Skipping {name}: {err}");
			return None;
		}
	};

	info!("Parsing: {name}");
	Some(parser.parse(name, &content))
}
