//! Documentation model consumed by the rubyskel renderer.
//!
//! A model is built once per source file by a scanner and is only read afterwards. Every
//! collection is keyed by name and holds the sequence of definitions seen for that name, so a
//! namespace reopened three times shows up as three entries under one key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name-keyed collection holding every definition seen for a name, in encounter order.
pub type Keyed<T> = IndexMap<String, Vec<T>>;

/// Append `entry` under `key`, creating the sequence on first use.
pub fn push_keyed<T>(collection: &mut Keyed<T>, key: impl Into<String>, entry: T) {
	collection.entry(key.into()).or_default().push(entry);
}

/// Distinguishes modules from classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NamespaceKind {
	/// A `module` declaration.
	Module,
	/// A `class` declaration with its declared superclass, if any.
	Class {
		/// Name of the superclass as written in the source.
		superclass: Option<String>,
	},
}

/// A module or class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
	/// Name as written in the declaration, possibly `::`-qualified.
	pub name: String,
	/// Raw documentation comment, empty when undocumented.
	pub comment: String,
	/// Module or class, carrying the superclass for classes.
	pub kind: NamespaceKind,
	/// Names of included namespaces, in declaration order.
	pub ancestors: Vec<String>,
	/// Nested modules and classes.
	pub namespaces: Keyed<Namespace>,
	/// Methods keyed by [`Method::key`].
	pub methods: Keyed<Method>,
}

impl Namespace {
	fn new(name: impl Into<String>, kind: NamespaceKind) -> Self {
		Self {
			name: name.into(),
			comment: String::new(),
			kind,
			ancestors: Vec::new(),
			namespaces: Keyed::new(),
			methods: Keyed::new(),
		}
	}

	/// Create an empty module.
	pub fn module(name: impl Into<String>) -> Self {
		Self::new(name, NamespaceKind::Module)
	}

	/// Create an empty class with an optional superclass.
	pub fn class(name: impl Into<String>, superclass: Option<&str>) -> Self {
		Self::new(
			name,
			NamespaceKind::Class {
				superclass: superclass.map(str::to_string),
			},
		)
	}

	/// Attach a documentation comment.
	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = comment.into();
		self
	}

	/// Append an included namespace.
	pub fn with_ancestor(mut self, ancestor: impl Into<String>) -> Self {
		self.ancestors.push(ancestor.into());
		self
	}

	/// Append a nested namespace definition.
	pub fn with_namespace(mut self, namespace: Namespace) -> Self {
		self.add_namespace(namespace);
		self
	}

	/// Append a method definition.
	pub fn with_method(mut self, method: Method) -> Self {
		self.add_method(method);
		self
	}

	/// Append a nested namespace definition under its name.
	pub fn add_namespace(&mut self, namespace: Namespace) {
		push_keyed(&mut self.namespaces, namespace.name.clone(), namespace);
	}

	/// Append a method definition under its key.
	pub fn add_method(&mut self, method: Method) {
		push_keyed(&mut self.methods, method.key(), method);
	}

	/// The declared superclass; always `None` for modules.
	pub fn superclass(&self) -> Option<&str> {
		match &self.kind {
			NamespaceKind::Class { superclass } => superclass.as_deref(),
			NamespaceKind::Module => None,
		}
	}

	/// Whether this namespace is a module.
	pub fn is_module(&self) -> bool {
		matches!(self.kind, NamespaceKind::Module)
	}
}

/// A method definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
	/// Bare method name, without receiver.
	pub name: String,
	/// Raw documentation comment, empty when undocumented.
	pub comment: String,
	/// Whether the method is bound to the namespace itself.
	pub singleton: bool,
}

impl Method {
	/// Create an undocumented instance method.
	pub fn instance(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			comment: String::new(),
			singleton: false,
		}
	}

	/// Create an undocumented singleton method.
	pub fn singleton(name: impl Into<String>) -> Self {
		Self {
			singleton: true,
			..Self::instance(name)
		}
	}

	/// Attach a documentation comment.
	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = comment.into();
		self
	}

	/// Collection key: `#name` for instance methods, `::name` for singleton methods.
	pub fn key(&self) -> String {
		if self.singleton {
			format!("::{}", self.name)
		} else {
			format!("#{}", self.name)
		}
	}
}

/// Root of the model built from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLevel {
	/// File name relative to the scanned directory.
	pub name: String,
	/// Top-level modules.
	pub modules: Keyed<Namespace>,
	/// Top-level classes.
	pub classes: Keyed<Namespace>,
	/// Methods defined outside any namespace.
	pub methods: Keyed<Method>,
}

impl TopLevel {
	/// Create an empty model for the named file.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Append a namespace to the module or class collection according to its kind.
	pub fn add_namespace(&mut self, namespace: Namespace) {
		let collection = if namespace.is_module() {
			&mut self.modules
		} else {
			&mut self.classes
		};
		push_keyed(collection, namespace.name.clone(), namespace);
	}

	/// Append a method defined outside any namespace.
	pub fn add_method(&mut self, method: Method) {
		push_keyed(&mut self.methods, method.key(), method);
	}

	/// Whether nothing was recorded for this file.
	pub fn is_empty(&self) -> bool {
		self.modules.is_empty() && self.classes.is_empty() && self.methods.is_empty()
	}
}
