//! CLI entrypoint.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use owo_colors::OwoColorize;
use rubyskel_core::Rubyskel;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Printed for any invocation that does not name exactly a source directory and an output file.
const USAGE: &str = "\
Ruby skeleton generator.
Usage:
  rubyskel source_dir output_file   # source_dir => ruby source code root directory
";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the rubyskel CLI.
struct Cli {
	/// Directory whose `.rb` and `.c` files are outlined (not searched recursively)
	source_dir: PathBuf,

	/// File the skeleton is written to, replacing any existing content
	output: PathBuf,

	/// Write the scanned model as JSON instead of a Ruby skeleton
	#[arg(short = 'r', long, default_value_t = false)]
	raw: bool,

	/// Leave out the trailing table of built-in globals and constants
	#[arg(long, default_value_t = false)]
	no_builtins: bool,

	/// Enable verbose mode, logging skipped files
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,
}

/// Parse `args`, or `None` when the invocation is malformed and the usage text applies.
///
/// `--help` and `--version` are printed by clap and end the process.
fn parse_args<I, T>(args: I) -> Option<Cli>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	match Cli::try_parse_from(args) {
		Ok(cli) => Some(cli),
		Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			err.exit()
		}
		Err(_) => None,
	}
}

/// Send logs to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
	let default = if verbose {
		"rubyskel=debug"
	} else {
		"rubyskel=info"
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

/// Outline the source directory into the output file.
fn run(cli: &Cli) -> anyhow::Result<()> {
	let rubyskel = Rubyskel::new().with_builtins(!cli.no_builtins);
	debug!(
		"Outlining {} into {} (raw: {}, builtins: {})",
		cli.source_dir.display(),
		cli.output.display(),
		cli.raw,
		!cli.no_builtins
	);

	if cli.raw {
		let json = rubyskel.raw_json(&cli.source_dir)?;
		fs::write(&cli.output, json)
			.with_context(|| format!("failed to write {}", cli.output.display()))?;
	} else {
		rubyskel
			.write(&cli.source_dir, &cli.output)
			.with_context(|| format!("failed to generate {}", cli.output.display()))?;
	}

	eprintln!("{} {}", "Wrote".green().bold(), cli.output.display());
	Ok(())
}

fn main() {
	let Some(cli) = parse_args(std::env::args_os()) else {
		print!("{USAGE}");
		return;
	};
	init_tracing(cli.verbose);

	if let Err(e) = run(&cli) {
		eprintln!("{} {e:#}", "error:".red().bold());
		process::exit(1);
	}
}
