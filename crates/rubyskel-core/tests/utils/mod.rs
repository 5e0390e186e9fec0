//! Shared helpers for the skeleton integration tests.
#![allow(dead_code)]

use pretty_assertions::assert_eq;
use rubyskel_core::Rubyskel;

/// Strip the indentation shared by every non-blank line, and the blank lines around the text.
pub fn dedent(text: &str) -> String {
	let indent = text
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(|line| line.len() - line.trim_start().len())
		.min()
		.unwrap_or(0);

	text.lines()
		.map(|line| line.get(indent..).unwrap_or("").trim_end())
		.collect::<Vec<_>>()
		.join("\n")
		.trim_matches('\n')
		.to_string()
}

/// Outline a Ruby snippet without the built-in tables.
pub fn outline(source: &str) -> String {
	Rubyskel::new()
		.with_builtins(false)
		.render_source("snippet.rb", &dedent(source))
		.expect("ruby scanner is registered")
}

/// Outline a C extension snippet without the built-in tables.
pub fn outline_c(source: &str) -> String {
	Rubyskel::new()
		.with_builtins(false)
		.render_source("snippet.c", &dedent(source))
		.expect("c scanner is registered")
}

/// Assert that `input` outlines to `expected`, ignoring indentation and trailing whitespace.
pub fn rt(input: &str, expected: &str) {
	assert_eq!(dedent(&outline(input)), dedent(expected));
}

/// Assert that a skeleton scans back to itself.
pub fn idemp(input: &str) {
	let first = outline(input);
	let second = outline(&first);
	assert_eq!(first, second);
	assert_eq!(dedent(&first), dedent(input));
}

/// Generate integration tests from `rt` (input and expected skeleton) and `idemp` (already a
/// skeleton) cases.
#[macro_export]
macro_rules! gen_tests {
	($prefix:ident, { $($kind:ident { $($body:tt)* })* }) => {
		mod $prefix {
			#[allow(unused_imports)]
			use super::*;
			$($crate::gen_tests!(@case $kind { $($body)* });)*
		}
	};
	(@case idemp { $name:ident : $input:expr }) => {
		#[test]
		fn $name() {
			$crate::utils::idemp($input);
		}
	};
	(@case rt { $name:ident : { input: $input:expr, output: $output:expr } }) => {
		#[test]
		fn $name() {
			$crate::utils::rt($input, $output);
		}
	};
}
