//! Source discovery and scanning for rubyskel.
//!
//! Files are discovered in the top level of a directory, matched to a scanner by extension, and
//! scanned into a [`rubyskel_model::TopLevel`]. Scanners are structural and tolerant: they never
//! fail, they just record less when the source is unusual.

/// Top-level directory scan by extension.
pub mod discover;
/// Error types exposed by the rubyskel-source crate.
pub mod error;
/// Scanner selection and the bundled Ruby and C scanners.
pub mod parser;

pub use discover::{DEFAULT_EXTENSIONS, discover_sources, relative_name};
pub use error::{Result, SourceError};
pub use parser::{CExtParser, RubyParser, SourceParser, parse_file, parser_for};
