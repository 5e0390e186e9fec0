/// Text of a Ruby comment line without its `#` and one following space.
pub fn ruby_comment_text(line: &str) -> Option<&str> {
	let text = line.strip_prefix('#')?;
	Some(text.strip_prefix(' ').unwrap_or(text))
}

/// Whether a Ruby comment line is an interpreter directive rather than documentation.
pub fn is_directive(line: &str) -> bool {
	if line.starts_with("#!") {
		return true;
	}
	let Some(text) = ruby_comment_text(line) else {
		return false;
	};
	let text = text.trim_start();
	text.starts_with("-*-")
		|| ["frozen_string_literal:", "encoding:", "coding:", "warn_indent:"]
			.iter()
			.any(|directive| text.starts_with(directive))
}

/// Turn the inside of a `/* ... */` block into plain comment text.
///
/// Leading `*` gutters are removed, the common indentation is stripped, and blank lines at the
/// start and end are dropped.
pub fn clean_block_comment(body: &str) -> String {
	let lines: Vec<&str> = body
		.lines()
		.map(|line| {
			let trimmed = line.trim_start();
			trimmed.strip_prefix('*').unwrap_or(line).trim_end()
		})
		.collect();

	let indent = lines
		.iter()
		.filter(|line| !line.is_empty())
		.map(|line| line.len() - line.trim_start().len())
		.min()
		.unwrap_or(0);
	let lines: Vec<&str> = lines
		.iter()
		.map(|line| line.get(indent..).unwrap_or(""))
		.collect();

	let start = lines.iter().position(|line| !line.is_empty());
	let end = lines.iter().rposition(|line| !line.is_empty());
	match (start, end) {
		(Some(start), Some(end)) => lines[start..=end].join("\n"),
		_ => String::new(),
	}
}
