use crate::engine::matcher::MatchResult;
use crate::error::{Result, SedrError};
use std::ops::Range;

/// Select the byte span of capture group `index` as the region to replace.
pub fn select_span(result: &MatchResult, index: usize) -> Result<Range<usize>> {
	match result.group(index) {
		Some(Some(span)) => Ok(span),
		Some(None) => Err(SedrError::GroupNotMatched { index }),
		None => Err(SedrError::GroupIndexOutOfRange {
			index,
			max: result.max_index(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::matcher::find_first;
	use regex::bytes::Regex;

	fn first(pattern: &str, content: &[u8]) -> MatchResult {
		find_first(&Regex::new(pattern).unwrap(), content).unwrap()
	}

	#[test]
	fn test_whole_match_always_selectable() {
		let result = first(r"b+", b"abbbc");
		assert_eq!(select_span(&result, 0).unwrap(), 1..4);
	}

	#[test]
	fn test_group_span() {
		let result = first(r"(\d{4})-(\d{2})", b"on 2024-01");
		assert_eq!(select_span(&result, 2).unwrap(), 8..10);
	}

	#[test]
	fn test_index_out_of_range_reports_max() {
		let result = first(r"(a)(b)", b"ab");
		match select_span(&result, 3).unwrap_err() {
			SedrError::GroupIndexOutOfRange { index, max } => {
				assert_eq!(index, 3);
				assert_eq!(max, 2);
			}
			other => panic!("Expected GroupIndexOutOfRange, got {other:?}"),
		}
	}

	#[test]
	fn test_no_groups_max_is_zero() {
		let result = first("foo", b"foo");
		let err = select_span(&result, 1).unwrap_err();
		assert_eq!(
			err.to_string(),
			"capture group index 1 out of range, max index is 0"
		);
	}

	#[test]
	fn test_unmatched_optional_group_fails() {
		let result = first("(a)(b)?", b"a");
		match select_span(&result, 2).unwrap_err() {
			SedrError::GroupNotMatched { index } => assert_eq!(index, 2),
			other => panic!("Expected GroupNotMatched, got {other:?}"),
		}
	}
}
