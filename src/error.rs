use std::path::PathBuf;

/// Library-level structured errors for sedr.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum SedrError {
	#[error("insufficient arguments: expected 3 or 4, got {count}")]
	InsufficientArguments { count: usize },

	#[error("too many arguments: expected 3 or 4, got {count}")]
	TooManyArguments { count: usize },

	#[error("error compiling regex: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("invalid capture group selector: {selector:?} (expected $0 or $<number>)")]
	InvalidSelector { selector: String },

	#[error("no matches found")]
	NoMatch,

	#[error("capture group index {index} out of range, max index is {max}")]
	GroupIndexOutOfRange { index: usize, max: usize },

	#[error("capture group {index} did not participate in the match")]
	GroupNotMatched { index: usize },

	#[error("error reading file: {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("error getting file stat: {path}")]
	Stat {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("error replacing content: {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("error closing file: {path}")]
	Close {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to read settings file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse settings file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// Result type alias using SedrError.
pub type Result<T> = std::result::Result<T, SedrError>;
