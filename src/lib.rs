//! sedr - single-shot, in-place regex substitution on a file.
//!
//! The pipeline reads the file, compiles the pattern, parses the group
//! selector, finds the first match, selects the span of the chosen group,
//! expands the template and writes `prefix + substitution + suffix` back.
//! Every stage before the write is side-effect free, so the file is only
//! touched once everything else has succeeded.
//!
//! # Example
//!
//! ```
//! use sedr::config::{Config, RegexSettings};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     pattern: r"(\d{4})-(\d{2})-(\d{2})".to_string(),
//!     selector: "$0".to_string(),
//!     template: "$1-$3-$2".to_string(),
//!     target: PathBuf::from("unused.txt"),
//! };
//!
//! let splice = sedr::substitute_bytes(b"date: 2024-01-15 end", &config, &RegexSettings::default()).unwrap();
//! assert_eq!(splice.span, 6..16);
//! assert_eq!(splice.content, b"date: 2024-15-01 end");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod rewrite;

pub use error::{Result, SedrError};

use crate::config::{Config, RegexSettings, Settings};
use crate::engine::{compile_pattern, expand_template, find_first, parse_selector, select_span};
use crate::rewrite::{FileSnapshot, write_spliced};
use std::ops::Range;
use std::path::PathBuf;

/// Result of matching and expanding against in-memory content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
	/// Selected capture group.
	pub group: usize,

	/// Replaced byte range of the original content.
	pub span: Range<usize>,

	/// Expanded substitution written in place of `span`.
	pub substitution: Vec<u8>,

	/// Full new content.
	pub content: Vec<u8>,
}

/// Summary of a completed file rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
	/// File that was rewritten, symlinks resolved.
	pub path: PathBuf,

	pub group: usize,
	pub span: Range<usize>,
	pub substitution_len: usize,
	pub original_len: usize,
	pub new_len: usize,
}

/// Run every stage except I/O against `content`.
pub fn substitute_bytes(content: &[u8], config: &Config, regex: &RegexSettings) -> Result<Splice> {
	let pattern = compile_pattern(&config.pattern, regex)?;
	let group = parse_selector(&config.selector)?;

	let result = find_first(&pattern, content)?;
	let span = select_span(&result, group)?;
	let substitution = expand_template(&config.template, &result.texts(content));

	let mut spliced =
		Vec::with_capacity(content.len() - (span.end - span.start) + substitution.len());
	spliced.extend_from_slice(&content[..span.start]);
	spliced.extend_from_slice(&substitution);
	spliced.extend_from_slice(&content[span.end..]);

	Ok(Splice {
		group,
		span,
		substitution,
		content: spliced,
	})
}

/// Perform the substitution described by `config` on its target file.
pub fn substitute_file(config: &Config, settings: &Settings) -> Result<Outcome> {
	let snapshot = FileSnapshot::read(&config.target)?;
	let splice = substitute_bytes(&snapshot.content, config, &settings.regex)?;

	let content = &snapshot.content;
	write_spliced(
		&snapshot,
		&content[..splice.span.start],
		&splice.substitution,
		&content[splice.span.end..],
		settings.sync,
	)?;

	Ok(Outcome {
		path: snapshot.path.clone(),
		group: splice.group,
		span: splice.span,
		substitution_len: splice.substitution.len(),
		original_len: content.len(),
		new_len: splice.content.len(),
	})
}
