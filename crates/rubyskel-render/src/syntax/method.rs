use rubyskel_model::Method;

use super::comment::render_comment;

/// Render a method as its comment followed by a body-less `def` stub.
pub fn render_method(method: &Method) -> String {
	let receiver = if method.singleton { "self." } else { "" };
	format!(
		"{}def {receiver}{}; end\n\n",
		render_comment(&method.comment),
		method.name
	)
}
