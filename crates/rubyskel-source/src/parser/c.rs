use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use rubyskel_model::{Method, Namespace, TopLevel};
use tree_sitter::Node;

use super::comments::clean_block_comment;
use super::{SourceParser, node_text, syntax_tree};

static DOCUMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?s)^/\*\s*\*?\s*Document-(?:class|module):\s*([\w:]+)(.*)\*/$")
		.expect("valid document directive pattern")
});

/// Scanner for C extension sources using the `rb_define_*` API, built on the tree-sitter C
/// grammar.
///
/// Classes and modules are collected from their define calls and nested according to the
/// `_under` variants. Method comments are the block comments above the implementing C function.
#[derive(Debug, Clone, Copy, Default)]
pub struct CExtParser;

impl SourceParser for CExtParser {
	fn parse(&self, name: &str, content: &str) -> TopLevel {
		let Some(tree) = syntax_tree(tree_sitter_c::LANGUAGE.into(), name, content) else {
			return TopLevel::new(name);
		};

		let mut index = Index {
			source: content,
			function_comments: HashMap::new(),
			documented: HashMap::new(),
			events: Vec::new(),
		};
		index.visit(tree.root_node());

		let mut builder = Builder::new(name, index.function_comments, index.documented);
		for event in index.events {
			builder.apply(event);
		}
		builder.finish()
	}
}

/// Single pass over the syntax tree collecting comments and `rb_*` calls in source order.
struct Index<'s> {
	source: &'s str,
	function_comments: HashMap<String, String>,
	documented: HashMap<String, String>,
	events: Vec<Event>,
}

impl<'s> Index<'s> {
	fn text(&self, node: Node<'_>) -> &'s str {
		node_text(node, self.source)
	}

	fn visit(&mut self, node: Node<'_>) {
		match node.kind() {
			"comment" => {
				if let Some(captures) = DOCUMENT_REGEX.captures(self.text(node)) {
					self.documented
						.insert(captures[1].to_string(), clean_block_comment(&captures[2]));
				}
			}
			"function_definition" => {
				let name = node
					.child_by_field_name("declarator")
					.and_then(declared_identifier);
				if let (Some(name), Some(comment)) = (name, self.leading_comment(node)) {
					self.function_comments
						.insert(self.text(name).to_string(), comment);
				}
			}
			"call_expression" => {
				if let Some(event) = self.event(node) {
					self.events.push(event);
				}
			}
			_ => {}
		}

		let mut cursor = node.walk();
		for child in node.children(&mut cursor) {
			self.visit(child);
		}
	}

	/// Cleaned text of the `/* ... */` block right before `node`, separated only by whitespace.
	fn leading_comment(&self, node: Node<'_>) -> Option<String> {
		let comment = node.prev_sibling().filter(|prev| prev.kind() == "comment")?;
		let gap = self.source.get(comment.end_byte()..node.start_byte())?;
		if !gap.trim().is_empty() {
			return None;
		}
		let body = self
			.text(comment)
			.strip_prefix("/*")?
			.strip_suffix("*/")?;
		Some(clean_block_comment(body))
	}

	/// The comment above the statement holding `call`.
	fn statement_comment(&self, call: Node<'_>) -> Option<String> {
		let mut node = call.parent();
		while let Some(current) = node {
			if matches!(current.kind(), "expression_statement" | "declaration") {
				return self.leading_comment(current);
			}
			node = current.parent();
		}
		None
	}

	fn event(&self, call: Node<'_>) -> Option<Event> {
		let function = call.child_by_field_name("function")?;
		if function.kind() != "identifier" {
			return None;
		}
		let arguments = call.child_by_field_name("arguments")?;
		let mut cursor = arguments.walk();
		let args: Vec<Node<'_>> = arguments
			.named_children(&mut cursor)
			.filter(|arg| arg.kind() != "comment")
			.collect();

		match self.text(function) {
			callee @ ("rb_define_class"
			| "rb_define_module"
			| "rb_define_class_under"
			| "rb_define_module_under") => {
				let module = callee.contains("module");
				let (outer, rest) = if callee.ends_with("_under") {
					(Some(self.text(*args.first()?).to_string()), args.get(1..)?)
				} else {
					(None, &args[..])
				};
				let name = self.string(*rest.first()?)?;
				let superclass = if module {
					None
				} else {
					rest.get(1).map(|arg| self.text(*arg).to_string())
				};
				Some(Event::Define {
					var: self.assigned_variable(call),
					module,
					outer,
					name,
					superclass,
					comment: self.statement_comment(call),
				})
			}
			callee @ ("rb_define_method"
			| "rb_define_private_method"
			| "rb_define_protected_method"
			| "rb_define_singleton_method"
			| "rb_define_module_function") => Some(Event::Method {
				target: Some(self.text(*args.first()?).to_string()),
				name: self.string(*args.get(1)?)?,
				function: self.function_name(*args.get(2)?)?,
				singleton: matches!(
					callee,
					"rb_define_singleton_method" | "rb_define_module_function"
				),
			}),
			"rb_define_global_function" => Some(Event::Method {
				target: None,
				name: self.string(*args.first()?)?,
				function: self.function_name(*args.get(1)?)?,
				singleton: false,
			}),
			"rb_include_module" => Some(Event::Include {
				target: self.text(*args.first()?).to_string(),
				module: self.text(*args.get(1)?).to_string(),
			}),
			_ => None,
		}
	}

	/// Contents of a string literal argument.
	fn string(&self, node: Node<'_>) -> Option<String> {
		if node.kind() != "string_literal" {
			return None;
		}
		let text = self.text(node);
		let inner = text.strip_prefix('"')?.strip_suffix('"')?;
		Some(inner.to_string())
	}

	/// The C function behind a method argument, looking through casts, parentheses, `&` and
	/// `RUBY_METHOD_FUNC(...)`.
	fn function_name(&self, node: Node<'_>) -> Option<String> {
		match node.kind() {
			"identifier" => Some(self.text(node).to_string()),
			"cast_expression" => self.function_name(node.child_by_field_name("value")?),
			"pointer_expression" => self.function_name(node.child_by_field_name("argument")?),
			"parenthesized_expression" => self.function_name(node.named_child(0)?),
			"call_expression" => {
				let arguments = node.child_by_field_name("arguments")?;
				self.function_name(arguments.named_child(0)?)
			}
			_ => None,
		}
	}

	/// Variable a define call is assigned to, as in `cFoo = rb_define_class(...)` or
	/// `VALUE cFoo = rb_define_class(...)`.
	fn assigned_variable(&self, call: Node<'_>) -> Option<String> {
		let parent = call.parent()?;
		let target = match parent.kind() {
			"assignment_expression" => parent.child_by_field_name("left")?,
			"init_declarator" => parent.child_by_field_name("declarator")?,
			_ => return None,
		};
		(target.kind() == "identifier").then(|| self.text(target).to_string())
	}
}

/// Identifier named by a declarator, following pointer and function declarators inwards.
fn declared_identifier(declarator: Node<'_>) -> Option<Node<'_>> {
	match declarator.kind() {
		"identifier" => Some(declarator),
		_ => declared_identifier(declarator.child_by_field_name("declarator")?),
	}
}

/// One recognised `rb_*` call.
enum Event {
	Define {
		var: Option<String>,
		module: bool,
		outer: Option<String>,
		name: String,
		superclass: Option<String>,
		comment: Option<String>,
	},
	Method {
		target: Option<String>,
		name: String,
		function: String,
		singleton: bool,
	},
	Include {
		target: String,
		module: String,
	},
}

/// A namespace under construction, linked to its parent by index.
struct Pending {
	namespace: Namespace,
	parent: Option<usize>,
}

struct Builder {
	top_level: TopLevel,
	pending: Vec<Pending>,
	variables: HashMap<String, usize>,
	function_comments: HashMap<String, String>,
	documented: HashMap<String, String>,
}

impl Builder {
	fn new(
		name: &str,
		function_comments: HashMap<String, String>,
		documented: HashMap<String, String>,
	) -> Self {
		Self {
			top_level: TopLevel::new(name),
			pending: Vec::new(),
			variables: HashMap::new(),
			function_comments,
			documented,
		}
	}

	fn apply(&mut self, event: Event) {
		match event {
			Event::Define {
				var,
				module,
				outer,
				name,
				superclass,
				comment,
			} => {
				let parent = outer.map(|outer| self.resolve(&outer));
				let superclass = superclass.map(|var| self.name_of(&var));
				let namespace = if module {
					Namespace::module(name)
				} else {
					Namespace::class(name, superclass.as_deref())
				};
				let index = self.push(namespace, parent);

				let qualified = self.qualified_name(index);
				let comment = self
					.documented
					.get(&qualified)
					.or_else(|| self.documented.get(&self.pending[index].namespace.name))
					.cloned()
					.or(comment)
					.unwrap_or_default();
				self.pending[index].namespace.comment = comment;

				if let Some(var) = var {
					self.variables.insert(var, index);
				}
			}
			Event::Method {
				target,
				name,
				function,
				singleton,
			} => {
				let mut method = if singleton {
					Method::singleton(name)
				} else {
					Method::instance(name)
				};
				if let Some(comment) = self.function_comments.get(&function) {
					method.comment = comment.clone();
				}
				match target {
					Some(target) => {
						let index = self.resolve(&target);
						self.pending[index].namespace.add_method(method);
					}
					None => self.top_level.add_method(method),
				}
			}
			Event::Include { target, module } => {
				let ancestor = self.name_of(&module);
				let index = self.resolve(&target);
				self.pending[index].namespace.ancestors.push(ancestor);
			}
		}
	}

	fn push(&mut self, namespace: Namespace, parent: Option<usize>) -> usize {
		self.pending.push(Pending { namespace, parent });
		self.pending.len() - 1
	}

	/// Index of the namespace bound to `var`, creating one from the variable's conventional name
	/// when the file never defines it.
	fn resolve(&mut self, var: &str) -> usize {
		if let Some(index) = self.variables.get(var) {
			return *index;
		}
		let name = conventional_name(var);
		let namespace = if var.starts_with("rb_m") {
			Namespace::module(name)
		} else {
			Namespace::class(name, None)
		};
		let index = self.push(namespace, None);
		self.variables.insert(var.to_string(), index);
		index
	}

	/// Ruby-side name for a C variable.
	fn name_of(&self, var: &str) -> String {
		match self.variables.get(var) {
			Some(index) => self.qualified_name(*index),
			None => conventional_name(var),
		}
	}

	fn qualified_name(&self, index: usize) -> String {
		let pending = &self.pending[index];
		match pending.parent {
			Some(parent) => format!("{}::{}", self.qualified_name(parent), pending.namespace.name),
			None => pending.namespace.name.clone(),
		}
	}

	/// Nest every namespace under its parent and hand the roots to the top level.
	fn finish(mut self) -> TopLevel {
		let mut children: Vec<Vec<usize>> = vec![Vec::new(); self.pending.len()];
		let mut roots = Vec::new();
		for (index, pending) in self.pending.iter().enumerate() {
			match pending.parent {
				Some(parent) => children[parent].push(index),
				None => roots.push(index),
			}
		}

		let mut slots: Vec<Option<Namespace>> = self
			.pending
			.into_iter()
			.map(|pending| Some(pending.namespace))
			.collect();
		for root in roots {
			if let Some(namespace) = assemble(root, &children, &mut slots) {
				self.top_level.add_namespace(namespace);
			}
		}
		self.top_level
	}
}

/// Move the namespace at `index` out of `slots` with its children nested inside it.
fn assemble(
	index: usize,
	children: &[Vec<usize>],
	slots: &mut [Option<Namespace>],
) -> Option<Namespace> {
	let mut namespace = slots[index].take()?;
	for &child in &children[index] {
		if let Some(nested) = assemble(child, children, slots) {
			namespace.add_namespace(nested);
		}
	}
	Some(namespace)
}

/// Strip the `rb_c`/`rb_m`/`rb_e` prefix CRuby uses for class, module and exception variables.
fn conventional_name(var: &str) -> String {
	["rb_c", "rb_m", "rb_e"]
		.iter()
		.find_map(|prefix| var.strip_prefix(prefix))
		.filter(|rest| !rest.is_empty())
		.unwrap_or(var)
		.to_string()
}
