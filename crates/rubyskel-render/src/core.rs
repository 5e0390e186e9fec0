use rubyskel_model::TopLevel;

use crate::builtins::render_builtins;
use crate::reduce::representatives;
use crate::syntax::{render_method, render_namespace};

/// Configurable renderer that turns documentation models into a Ruby skeleton.
#[derive(Debug, Clone)]
pub struct Renderer {
	/// Whether the built-in globals and constants tables close the output.
	pub render_builtins: bool,
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

impl Renderer {
	/// Create a renderer with default configuration.
	pub fn new() -> Self {
		Self {
			render_builtins: true,
		}
	}

	/// Append the built-in globals and constants tables after the last file?
	pub fn with_builtins(mut self, render_builtins: bool) -> Self {
		self.render_builtins = render_builtins;
		self
	}

	/// Render one file's model: its modules, then its classes, then its free methods.
	pub fn render_top_level(&self, top_level: &TopLevel) -> String {
		let mut output = String::new();
		for module in representatives(&top_level.modules) {
			output.push_str(&render_namespace(module));
		}
		for class in representatives(&top_level.classes) {
			output.push_str(&render_namespace(class));
		}
		for method in representatives(&top_level.methods) {
			output.push_str(&render_method(method));
		}
		output
	}

	/// Render the trailer written once after every file, empty when built-ins are disabled.
	pub fn render_trailer(&self) -> String {
		if self.render_builtins {
			render_builtins()
		} else {
			String::new()
		}
	}

	/// Render a whole run. Absent entries stand for files that had no parser and are skipped.
	pub fn render<'a, I>(&self, top_levels: I) -> String
	where
		I: IntoIterator<Item = Option<&'a TopLevel>>,
	{
		let mut output: String = top_levels
			.into_iter()
			.flatten()
			.map(|top_level| self.render_top_level(top_level))
			.collect();
		output.push_str(&self.render_trailer());
		output
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rubyskel_model::{Method, Namespace, TopLevel};

	use super::Renderer;

	fn fixture() -> TopLevel {
		let mut top = TopLevel::new("fixture.rb");
		top.add_method(Method::instance("helper"));
		top.add_namespace(Namespace::class("Widget", Some("Base")));
		top.add_namespace(Namespace::module("Paintable"));
		top
	}

	#[test]
	fn modules_then_classes_then_methods() {
		let rendered = Renderer::default().render_top_level(&fixture());
		assert_eq!(
			rendered,
			"module Paintable\nend\n\nclass Widget < Base\nend\n\ndef helper; end\n\n"
		);
	}

	#[test]
	fn absent_files_are_skipped() {
		let top = fixture();
		let renderer = Renderer::default().with_builtins(false);
		let rendered = renderer.render([None, Some(&top), None]);
		assert_eq!(rendered, renderer.render_top_level(&top));
	}

	#[test]
	fn builtins_close_the_run() {
		let top = fixture();
		let rendered = Renderer::default().render([Some(&top)]);
		let (files, trailer) = rendered.split_at(Renderer::default().render_top_level(&top).len());
		assert!(files.ends_with("def helper; end\n\n"));
		assert!(trailer.starts_with("# The exception information"));
	}

	#[test]
	fn disabled_builtins_render_nothing_for_empty_runs() {
		let renderer = Renderer::default().with_builtins(false);
		assert_eq!(renderer.render(std::iter::empty::<Option<&TopLevel>>()), "");
	}

	#[test]
	fn rendering_is_idempotent() {
		let top = fixture();
		let renderer = Renderer::default();
		assert_eq!(renderer.render([Some(&top)]), renderer.render([Some(&top)]));
	}
}
