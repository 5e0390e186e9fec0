use rubyskel_model::{Method, Namespace, TopLevel};
use tree_sitter::Node;

use super::comments::{is_directive, ruby_comment_text};
use super::{SourceParser, node_text, syntax_tree};

/// Calls that take a method definition as their argument without changing its receiver.
const DEFINITION_WRAPPERS: &[&str] = &[
	"private",
	"protected",
	"public",
	"private_class_method",
	"public_class_method",
	"module_function",
];

/// Structural scanner for Ruby source files, built on the tree-sitter Ruby grammar.
///
/// Collects `module`/`class` nesting, `def` declarations, `include` calls and the `#` comment
/// blocks directly above them. Method bodies are never entered.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyParser;

impl SourceParser for RubyParser {
	fn parse(&self, name: &str, content: &str) -> TopLevel {
		let mut top_level = TopLevel::new(name);
		let Some(tree) = syntax_tree(tree_sitter_ruby::LANGUAGE.into(), name, content) else {
			return top_level;
		};

		let walker = Walker { source: content };
		walker.members(tree.root_node(), &mut Owner::TopLevel(&mut top_level), false);
		top_level
	}
}

/// Where definitions found in the current body are recorded.
enum Owner<'m> {
	TopLevel(&'m mut TopLevel),
	Namespace(&'m mut Namespace),
}

impl Owner<'_> {
	fn add_namespace(&mut self, namespace: Namespace) {
		match self {
			Self::TopLevel(top_level) => top_level.add_namespace(namespace),
			Self::Namespace(parent) => parent.add_namespace(namespace),
		}
	}

	fn add_method(&mut self, method: Method) {
		match self {
			Self::TopLevel(top_level) => top_level.add_method(method),
			Self::Namespace(parent) => parent.add_method(method),
		}
	}

	/// `include` at the top level mixes into `Object` and is not recorded.
	fn include(&mut self, ancestor: &str) {
		if let Self::Namespace(namespace) = self {
			namespace.ancestors.push(ancestor.to_string());
		}
	}
}

struct Walker<'s> {
	source: &'s str,
}

impl<'s> Walker<'s> {
	fn text(&self, node: Node<'_>) -> &'s str {
		node_text(node, self.source)
	}

	/// Record the definitions in `container`'s body, attaching each comment block to the
	/// definition on the line right below it.
	fn members(&self, container: Node<'_>, owner: &mut Owner<'_>, singleton: bool) {
		let mut comment: Vec<&str> = Vec::new();
		let mut last_comment_row: Option<usize> = None;
		let mut last_code_row: Option<usize> = None;

		for child in body_children(container) {
			let row = child.start_position().row;

			if child.kind() == "comment" {
				let adjacent = last_comment_row.is_some_and(|last| last + 1 == row);
				if !adjacent {
					comment.clear();
				}
				last_comment_row = Some(child.end_position().row);

				let text = self.text(child).trim_end();
				if last_code_row == Some(row) || text == "##" || is_directive(text) {
					comment.clear();
					continue;
				}
				match ruby_comment_text(text) {
					Some(line) => comment.push(line),
					// `=begin` ... `=end`
					None => comment.clear(),
				}
				continue;
			}

			let documented = last_comment_row.is_some_and(|last| last + 1 == row);
			let doc = if documented {
				comment.join("\n").trim_matches('\n').to_string()
			} else {
				String::new()
			};
			comment.clear();
			last_comment_row = None;
			last_code_row = Some(child.end_position().row);

			self.member(child, owner, singleton, doc);
		}
	}

	fn member(&self, node: Node<'_>, owner: &mut Owner<'_>, singleton: bool, doc: String) {
		match node.kind() {
			"class" | "module" => owner.add_namespace(self.namespace(node, doc)),
			"singleton_class" => self.members(node, owner, true),
			"method" => {
				if let Some(name) = self.field_text(node, "name") {
					owner.add_method(self.method(name, singleton, doc));
				}
			}
			"singleton_method" => {
				if let Some(name) = self.field_text(node, "name") {
					owner.add_method(self.method(name, true, doc));
				}
			}
			"call" => self.call(node, owner, singleton, doc),
			_ => {}
		}
	}

	fn namespace(&self, node: Node<'_>, doc: String) -> Namespace {
		let name = self.field_text(node, "name").unwrap_or_default();
		let mut namespace = if node.kind() == "module" {
			Namespace::module(name)
		} else {
			let superclass = node
				.child_by_field_name("superclass")
				.and_then(|superclass| superclass.named_child(0))
				.map(|expr| self.text(expr).trim());
			Namespace::class(name, superclass)
		}
		.with_comment(doc);

		self.members(node, &mut Owner::Namespace(&mut namespace), false);
		namespace
	}

	fn method(&self, name: &str, singleton: bool, doc: String) -> Method {
		let method = if singleton {
			Method::singleton(name)
		} else {
			Method::instance(name)
		};
		method.with_comment(doc)
	}

	/// Receiver-less calls: `include` adds ancestors, visibility wrappers such as
	/// `private def ...` pass their method definition through.
	fn call(&self, node: Node<'_>, owner: &mut Owner<'_>, singleton: bool, doc: String) {
		if node.child_by_field_name("receiver").is_some() {
			return;
		}
		let (Some(method), Some(arguments)) = (
			self.field_text(node, "method"),
			node.child_by_field_name("arguments"),
		) else {
			return;
		};

		let mut cursor = arguments.walk();
		let arguments: Vec<Node<'_>> = arguments.named_children(&mut cursor).collect();

		if method == "include" {
			for argument in arguments {
				if matches!(argument.kind(), "constant" | "scope_resolution") {
					owner.include(self.text(argument));
				}
			}
		} else if DEFINITION_WRAPPERS.contains(&method) {
			for argument in arguments {
				if matches!(argument.kind(), "method" | "singleton_method") {
					self.member(argument, owner, singleton, doc.clone());
				}
			}
		}
	}

	fn field_text(&self, node: Node<'_>, field: &str) -> Option<&'s str> {
		node.child_by_field_name(field).map(|child| self.text(child))
	}
}

/// Named children of a definition body, with `body_statement` wrappers and error-recovery
/// nodes flattened in place.
fn body_children(node: Node<'_>) -> Vec<Node<'_>> {
	let mut cursor = node.walk();
	let mut children = Vec::new();
	for child in node.named_children(&mut cursor) {
		if matches!(child.kind(), "body_statement" | "ERROR") {
			children.extend(body_children(child));
		} else {
			children.push(child);
		}
	}
	children
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rubyskel_model::{Namespace, NamespaceKind, TopLevel};

	use super::*;

	fn parse(source: &str) -> TopLevel {
		RubyParser.parse("test.rb", source)
	}

	fn class<'a>(top: &'a TopLevel, name: &str) -> &'a Namespace {
		top.classes[name].last().expect("class entry")
	}

	fn method_keys(namespace: &Namespace) -> Vec<&str> {
		namespace.methods.keys().map(String::as_str).collect()
	}

	#[test]
	fn class_with_superclass_includes_and_methods() {
		let top = parse(
			"\
# A point in the plane.
class Point < Struct
  include Comparable, Enumerable

  # Distance from the origin.
  def magnitude
    Math.sqrt(x * x + y * y)
  end

  def self.origin
    new(0, 0)
  end
end
",
		);

		let point = class(&top, "Point");
		assert_eq!(point.comment, "A point in the plane.");
		assert_eq!(
			point.kind,
			NamespaceKind::Class {
				superclass: Some("Struct".into())
			}
		);
		assert_eq!(point.ancestors, vec!["Comparable", "Enumerable"]);
		assert_eq!(method_keys(point), vec!["#magnitude", "::origin"]);
		assert_eq!(
			point.methods["#magnitude"][0].comment,
			"Distance from the origin."
		);
	}

	#[test]
	fn nested_namespaces_attach_to_their_parent() {
		let top = parse(
			"\
module Outer
  class Inner
    def call; end
  end

  module Helpers
  end
end
",
		);

		assert!(top.classes.is_empty());
		let outer = top.modules["Outer"].last().unwrap();
		assert_eq!(
			outer.namespaces.keys().collect::<Vec<_>>(),
			vec!["Inner", "Helpers"]
		);
		assert!(outer.namespaces["Helpers"][0].is_module());
		assert_eq!(method_keys(&outer.namespaces["Inner"][0]), vec!["#call"]);
	}

	#[test]
	fn singleton_class_methods_are_singletons() {
		let top = parse(
			"\
class Config
  class << self
    def load(path)
      new
    end
  end

  def reload; end
end
",
		);

		assert_eq!(
			method_keys(class(&top, "Config")),
			vec!["::load", "#reload"]
		);
	}

	#[test]
	fn method_bodies_are_not_entered() {
		let top = parse(
			"\
class Runner
  def run(items)
    items.each do |item|
      if item.ready?
        process(item)
      end
    end
    def nested_helper; end
    result = case mode
             when :fast then 1
             else 2
             end
  end

  def after; end
end
",
		);

		assert_eq!(method_keys(class(&top, "Runner")), vec!["#run", "#after"]);
		assert!(top.methods.is_empty());
	}

	#[test]
	fn one_liners_endless_and_wrapped_definitions() {
		let top = parse(
			"\
class Error < StandardError; end
module Empty; end

class Shape
  def area = 0
  def name() = self.class.name
  def to_s; name; end
  def ==(other)
    other.is_a?(Shape)
  end
  def width=(value)
    @width = value
  end
  # Hidden.
  private def secret
    42
  end
end
",
		);

		assert_eq!(
			class(&top, "Error").superclass(),
			Some("StandardError")
		);
		assert!(top.modules.contains_key("Empty"));
		let shape = class(&top, "Shape");
		assert_eq!(
			method_keys(shape),
			vec!["#area", "#name", "#to_s", "#==", "#width=", "#secret"]
		);
		assert_eq!(shape.methods["#secret"][0].comment, "Hidden.");
	}

	#[test]
	fn reopened_classes_are_separate_entries() {
		let top = parse(
			"\
# first
class D
  def a; end
end

# second
class D
  def b; end
end
",
		);

		let entries = &top.classes["D"];
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].comment, "first");
		assert_eq!(entries[1].comment, "second");
		assert_eq!(method_keys(&entries[1]), vec!["#b"]);
	}

	#[test]
	fn comments_need_to_touch_their_definition() {
		let top = parse(
			"\
#!/usr/bin/env ruby
# frozen_string_literal: true

# Detached remark.

class Plain
  # Multi-line
  #
  # documentation.
  def documented; end

  # Stale.
  attr_reader :value
  def undocumented; end

  VERSION = 1 # trailing note
  def after_trailing; end
end
",
		);

		let plain = class(&top, "Plain");
		assert_eq!(plain.comment, "");
		assert_eq!(
			plain.methods["#documented"][0].comment,
			"Multi-line\n\ndocumentation."
		);
		assert_eq!(plain.methods["#undocumented"][0].comment, "");
		assert_eq!(plain.methods["#after_trailing"][0].comment, "");
	}

	#[test]
	fn double_hash_opens_a_fresh_comment_block() {
		let top = parse(
			"\
# stray
##
# Parses input.
#
# Returns a tree.
def parse; end
",
		);

		assert_eq!(
			top.methods["#parse"][0].comment,
			"Parses input.\n\nReturns a tree."
		);
	}

	#[test]
	fn heredocs_block_comments_and_end_marker_are_skipped() {
		let top = parse(
			"\
class Template
  BODY = <<~EOS
    class Fake
    end
  EOS

=begin
def hidden; end
=end

  def render; end
end

def helper; end
__END__
class AfterEnd
end
",
		);

		assert_eq!(top.classes.keys().collect::<Vec<_>>(), vec!["Template"]);
		assert_eq!(method_keys(class(&top, "Template")), vec!["#render"]);
		assert_eq!(top.methods.keys().collect::<Vec<_>>(), vec!["#helper"]);
	}

	#[test]
	fn shift_operator_is_not_a_heredoc() {
		let top = parse(
			"\
class Flags
  MASK = 1<<SHIFT
  def enabled?; end
end

class Other
  def run; end
end
",
		);

		assert_eq!(
			top.classes.keys().collect::<Vec<_>>(),
			vec!["Flags", "Other"]
		);
		assert_eq!(method_keys(class(&top, "Flags")), vec!["#enabled?"]);
		assert_eq!(method_keys(class(&top, "Other")), vec!["#run"]);
	}

	#[test]
	fn multi_line_strings_cannot_close_a_class() {
		let top = parse(
			"\
class A
  def msg
    \"first line
end\"
  end

  def after; end
end
",
		);

		assert_eq!(method_keys(class(&top, "A")), vec!["#msg", "#after"]);
		assert!(top.methods.is_empty());
	}

	#[test]
	fn keywords_inside_word_arrays_open_nothing() {
		let top = parse(
			"\
class A
  WORDS = %w[
    if
  ]
end

class B
end
",
		);

		assert_eq!(top.classes.keys().collect::<Vec<_>>(), vec!["A", "B"]);
		assert!(class(&top, "A").namespaces.is_empty());
	}

	#[test]
	fn qualified_names_keep_their_scope() {
		let top = parse(
			"\
class Net::HTTP < ::Protocol
  def get; end
end
",
		);

		let http = class(&top, "Net::HTTP");
		assert_eq!(http.superclass(), Some("::Protocol"));
		assert_eq!(method_keys(http), vec!["#get"]);
	}

	#[test]
	fn include_with_parentheses_only_applies_inside_namespaces() {
		let top = parse(
			"\
include Kernel

module Walkable
  include(Enumerable)
end
",
		);

		let walkable = top.modules["Walkable"].last().unwrap();
		assert_eq!(walkable.ancestors, vec!["Enumerable"]);
	}
}
