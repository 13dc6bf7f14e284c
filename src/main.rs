use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use sedr::config::{Config, LoadedSettings, load_settings};
use sedr::{Outcome, SedrError, substitute_file};

const NOTES: &str = "\
Example:
  sedr '(\\d{4})-(\\d{2})-(\\d{2})' '$0' '$1-$3-$2' file.txt

Note:
  - $0 represents the entire matched string
  - $+ can be used to represent a literal $
  - Only the first match in the file is replaced
  - Use -- before a regex that starts with --";

const BUILD_HASH: &str = match option_env!("SEDR_BUILD_HASH") {
	Some(hash) => hash,
	None => "unknown",
};

const BUILD_TIME: &str = match option_env!("SEDR_BUILD_TIME") {
	Some(time) => time,
	None => "unknown",
};

#[derive(Parser)]
#[command(name = "sedr")]
#[command(
	author,
	version,
	about = "Replace the first regex match in a file, in place",
	override_usage = "sedr [OPTIONS] <regex> [<group-selector>] <substitution> <file>",
	after_help = NOTES,
	disable_help_flag = true,
	disable_version_flag = true
)]
struct Cli {
	/// Do not print the success message
	#[arg(long)]
	quiet: bool,

	/// Print match and rewrite details to stderr
	#[arg(long)]
	verbose: bool,

	/// Read settings from this file instead of ~/.sedr.toml
	#[arg(long, value_name = "FILE", conflicts_with = "no_config")]
	config: Option<PathBuf>,

	/// Ignore ~/.sedr.toml
	#[arg(long)]
	no_config: bool,

	/// Print help
	#[arg(long, action = ArgAction::Help)]
	help: Option<bool>,

	/// Print version
	#[arg(long, action = ArgAction::Version)]
	version: Option<bool>,

	/// <regex> [<group-selector>] <substitution> <file>
	///
	/// Flags are long-only, so a regex may start with `-`; `--` ends flag parsing.
	#[arg(
		value_name = "ARGS",
		trailing_var_arg = true,
		allow_hyphen_values = true
	)]
	args: Vec<String>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			println!("Error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let config = match Config::from_args(&cli.args) {
		Ok(config) => config,
		Err(e) => return Ok(usage_error(&e)),
	};

	let loaded = load_settings(cli.config.as_deref(), cli.no_config)
		.context("Failed to load settings")?;

	if cli.verbose {
		report_settings(&loaded);
	}

	let outcome = substitute_file(&config, &loaded.settings)?;

	if cli.verbose {
		report_outcome(&outcome);
	}

	if !(cli.quiet || loaded.settings.quiet) {
		println!("File processed successfully");
	}

	Ok(ExitCode::SUCCESS)
}

fn usage_error(error: &SedrError) -> ExitCode {
	println!("{error}");
	println!("{}", Cli::command().render_help());
	println!();
	println!("Version: {}", env!("CARGO_PKG_VERSION"));
	println!("Build Hash: {BUILD_HASH}");
	println!("Build Time: {BUILD_TIME}");
	ExitCode::FAILURE
}

fn report_settings(loaded: &LoadedSettings) {
	match loaded.path {
		Some(ref path) => eprintln!("sedr: settings from {}", path.display()),
		None => eprintln!("sedr: using default settings"),
	}
}

fn report_outcome(outcome: &Outcome) {
	eprintln!(
		"sedr: replaced group {} at bytes {}..{} of {}",
		outcome.group,
		outcome.span.start,
		outcome.span.end,
		outcome.path.display()
	);
	eprintln!(
		"sedr: substitution is {} bytes, file {} -> {} bytes",
		outcome.substitution_len, outcome.original_len, outcome.new_len
	);
}
