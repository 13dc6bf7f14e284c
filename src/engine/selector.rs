use crate::error::{Result, SedrError};

/// Parse a group selector (`$0`, `$1`, ...) into a capture group index.
pub fn parse_selector(selector: &str) -> Result<usize> {
	let invalid = || SedrError::InvalidSelector {
		selector: selector.to_string(),
	};

	let digits = selector.strip_prefix('$').ok_or_else(invalid)?;
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return Err(invalid());
	}

	digits.parse().map_err(|_| invalid())
}
