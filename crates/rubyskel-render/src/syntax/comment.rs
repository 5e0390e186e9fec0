/// Marker line opening every rendered comment block.
pub const BLOCK_MARKER: &str = "##";

/// Prefix applied to each line of a rendered comment.
pub const LINE_PREFIX: &str = "# ";

/// Render a raw comment as a `##`-opened block of `# `-prefixed lines.
///
/// Only an empty comment renders as nothing, so callers can concatenate the result
/// unconditionally. Interior blank lines are kept as bare prefixes; trailing blank lines are
/// dropped.
pub fn render_comment(comment: &str) -> String {
	if comment.is_empty() {
		return String::new();
	}

	let mut lines: Vec<&str> = comment
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line))
		.collect();
	while lines.last().is_some_and(|line| line.is_empty()) {
		lines.pop();
	}

	let mut output = format!("{BLOCK_MARKER}\n");
	for line in lines {
		output.push_str(LINE_PREFIX);
		output.push_str(line);
		output.push('\n');
	}
	output
}
