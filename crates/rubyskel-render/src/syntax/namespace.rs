use rubyskel_model::{Namespace, NamespaceKind};

use super::comment::render_comment;
use super::method::render_method;
use crate::reduce::representatives;

/// Render a module or class block, recursing into its nested namespaces and methods.
pub fn render_namespace(namespace: &Namespace) -> String {
	let mut output = render_comment(&namespace.comment);
	output.push_str(&render_opening(namespace));
	output.push('\n');

	for ancestor in included_ancestors(namespace) {
		output.push_str(&format!("include {ancestor}\n"));
	}

	for nested in representatives(&namespace.namespaces) {
		output.push_str(&render_namespace(nested));
	}

	for method in representatives(&namespace.methods) {
		output.push_str(&render_method(method));
	}

	output.push_str("end\n\n");
	output
}

/// Render the opening declaration line, without a trailing newline.
pub fn render_opening(namespace: &Namespace) -> String {
	match &namespace.kind {
		NamespaceKind::Module => format!("module {}", namespace.name),
		NamespaceKind::Class { superclass: None } => format!("class {}", namespace.name),
		NamespaceKind::Class {
			superclass: Some(superclass),
		} => format!("class {} < {superclass}", namespace.name),
	}
}

/// Ancestors that need an `include` line.
///
/// A class's superclass is already expressed by its opening line, so every ancestor equal to it
/// is dropped wherever it appears in the list.
pub fn included_ancestors(namespace: &Namespace) -> impl Iterator<Item = &str> {
	let superclass = namespace.superclass();
	namespace
		.ancestors
		.iter()
		.map(String::as_str)
		.filter(move |ancestor| Some(*ancestor) != superclass)
}
