//! Rendering logic that converts a documentation model into a Ruby stub skeleton.
//!
//! Each namespace becomes a `module`/`class` block with its `include` lines, nested
//! namespaces and `def name; end` stubs, preceded by the original documentation comments.

/// Main renderer configuration and public API.
pub mod core;
/// Fixed documentation for interpreter-provided globals and constants.
pub mod builtins;
/// Last-definition-wins selection over keyed collections.
pub mod reduce;
/// Comment, method and namespace rendering.
pub mod syntax;

// Re-export public API
pub use core::Renderer;

pub use syntax::{render_comment, render_method, render_namespace};
