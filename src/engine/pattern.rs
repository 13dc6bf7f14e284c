use crate::config::RegexSettings;
use crate::error::{Result, SedrError};
use regex::bytes::{Regex, RegexBuilder};

/// Compile a pattern for byte-oriented matching against file content.
pub fn compile_pattern(pattern: &str, settings: &RegexSettings) -> Result<Regex> {
	RegexBuilder::new(pattern)
		.case_insensitive(settings.case_insensitive)
		.multi_line(settings.multi_line)
		.dot_matches_new_line(settings.dot_matches_new_line)
		.crlf(settings.crlf)
		.unicode(settings.unicode)
		.build()
		.map_err(|source| SedrError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})
}
