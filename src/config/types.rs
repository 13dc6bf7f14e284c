use crate::error::{Result, SedrError};
use serde::Deserialize;
use std::path::PathBuf;

/// Selector used when only three positional arguments are given.
pub const DEFAULT_SELECTOR: &str = "$0";

/// One substitution request: what to match, which span to replace, what to
/// put there and in which file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Regular expression matched against the whole file.
	pub pattern: String,

	/// Capture group whose span gets replaced, as `$N`.
	pub selector: String,

	/// Replacement template; `$N` expands to group N, `$+` to a literal `$`.
	pub template: String,

	/// File rewritten in place.
	pub target: PathBuf,
}

impl Config {
	/// Build a config from positional arguments.
	///
	/// Accepts `<regex> <substitution> <file>` or
	/// `<regex> <group-selector> <substitution> <file>`; any other count is rejected.
	pub fn from_args(args: &[String]) -> Result<Self> {
		match args {
			[pattern, template, target] => Ok(Config {
				pattern: pattern.clone(),
				selector: DEFAULT_SELECTOR.to_string(),
				template: template.clone(),
				target: PathBuf::from(target),
			}),
			[pattern, selector, template, target] => Ok(Config {
				pattern: pattern.clone(),
				selector: selector.clone(),
				template: template.clone(),
				target: PathBuf::from(target),
			}),
			_ if args.len() < 3 => Err(SedrError::InsufficientArguments { count: args.len() }),
			_ => Err(SedrError::TooManyArguments { count: args.len() }),
		}
	}
}

/// Settings loaded from a `.sedr.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
	/// Suppress the success message.
	#[serde(default)]
	pub quiet: bool,

	/// Flush the rewritten file to disk before it replaces the original.
	#[serde(default = "default_true")]
	pub sync: bool,

	/// Flags applied when compiling the pattern.
	#[serde(default)]
	pub regex: RegexSettings,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			quiet: false,
			sync: true,
			regex: RegexSettings::default(),
		}
	}
}

/// Regex builder flags. Inline flags such as `(?i)` in the pattern still apply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegexSettings {
	#[serde(default)]
	pub case_insensitive: bool,

	/// `^` and `$` match at line boundaries.
	#[serde(default)]
	pub multi_line: bool,

	#[serde(default)]
	pub dot_matches_new_line: bool,

	/// Treat `\r\n` as a line terminator in multi-line mode.
	#[serde(default)]
	pub crlf: bool,

	#[serde(default = "default_true")]
	pub unicode: bool,
}

impl Default for RegexSettings {
	fn default() -> Self {
		RegexSettings {
			case_insensitive: false,
			multi_line: false,
			dot_matches_new_line: false,
			crlf: false,
			unicode: true,
		}
	}
}

fn default_true() -> bool {
	true
}

/// Settings together with the file they came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
	pub settings: Settings,

	/// `None` when built-in defaults are in use.
	pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn args(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn test_three_args_default_selector() {
		let config = Config::from_args(&args(&["foo", "bar", "file.txt"])).unwrap();
		assert_eq!(config.pattern, "foo");
		assert_eq!(config.selector, "$0");
		assert_eq!(config.template, "bar");
		assert_eq!(config.target, PathBuf::from("file.txt"));
	}

	#[test]
	fn test_four_args_explicit_selector() {
		let config = Config::from_args(&args(&["(a)(b)", "$2", "x", "file.txt"])).unwrap();
		assert_eq!(config.selector, "$2");
		assert_eq!(config.template, "x");
		assert_eq!(config.target, PathBuf::from("file.txt"));
	}

	#[test]
	fn test_too_few_args() {
		match Config::from_args(&args(&["foo", "bar"])).unwrap_err() {
			SedrError::InsufficientArguments { count } => assert_eq!(count, 2),
			other => panic!("Expected InsufficientArguments, got {other:?}"),
		}
	}

	#[test]
	fn test_too_many_args_rejected() {
		match Config::from_args(&args(&["a", "$1", "extra", "b", "file.txt"])).unwrap_err() {
			SedrError::TooManyArguments { count } => assert_eq!(count, 5),
			other => panic!("Expected TooManyArguments, got {other:?}"),
		}
	}

	#[test]
	fn test_settings_defaults() {
		let settings = Settings::default();
		assert!(!settings.quiet);
		assert!(settings.sync);
		assert!(settings.regex.unicode);
		assert!(!settings.regex.case_insensitive);
	}
}
