use crate::error::{Result, SedrError};
use regex::bytes::Regex;
use std::ops::Range;

/// Byte offsets of the first match and each of its capture groups.
///
/// Index 0 is the whole match. A group that did not participate is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
	groups: Vec<Option<Range<usize>>>,
}

impl MatchResult {
	/// Highest valid group index.
	pub fn max_index(&self) -> usize {
		self.groups.len() - 1
	}

	/// Offsets of a group. Outer `None` means the index does not exist,
	/// inner `None` means the group did not participate.
	pub fn group(&self, index: usize) -> Option<Option<Range<usize>>> {
		self.groups.get(index).cloned()
	}

	/// Matched text of every group, in group order. Groups that did not
	/// participate yield an empty slice.
	pub fn texts<'c>(&self, content: &'c [u8]) -> Vec<&'c [u8]> {
		self.groups
			.iter()
			.map(|group| match group {
				Some(range) => &content[range.clone()],
				None => &[][..],
			})
			.collect()
	}
}

/// Find the first match of `pattern` in `content`, scanning from offset 0.
pub fn find_first(pattern: &Regex, content: &[u8]) -> Result<MatchResult> {
	let captures = pattern.captures(content).ok_or(SedrError::NoMatch)?;

	let groups = captures
		.iter()
		.map(|group| group.map(|m| m.range()))
		.collect();

	Ok(MatchResult { groups })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn regex(pattern: &str) -> Regex {
		Regex::new(pattern).unwrap()
	}

	#[test]
	fn test_date_offsets() {
		let result = find_first(
			&regex(r"(\d{4})-(\d{2})-(\d{2})"),
			b"date: 2024-01-15 end",
		)
		.unwrap();

		assert_eq!(result.max_index(), 3);
		assert_eq!(result.group(0), Some(Some(6..16)));
		assert_eq!(result.group(1), Some(Some(6..10)));
		assert_eq!(result.group(2), Some(Some(11..13)));
		assert_eq!(result.group(3), Some(Some(14..16)));
		assert_eq!(result.group(4), None);
	}

	#[test]
	fn test_only_first_match_considered() {
		let result = find_first(&regex("foo"), b"foofoo").unwrap();
		assert_eq!(result.group(0), Some(Some(0..3)));
	}

	#[test]
	fn test_no_match() {
		assert!(matches!(
			find_first(&regex("xyz"), b"abc"),
			Err(SedrError::NoMatch)
		));
	}

	#[test]
	fn test_non_participating_group() {
		let result = find_first(&regex("(a)(b)?"), b"a").unwrap();
		assert_eq!(result.group(1), Some(Some(0..1)));
		assert_eq!(result.group(2), Some(None));

		let texts = result.texts(b"a");
		assert_eq!(texts, vec![&b"a"[..], &b"a"[..], &b""[..]]);
	}

	#[test]
	fn test_empty_match_at_start() {
		let result = find_first(&regex("x*"), b"abc").unwrap();
		assert_eq!(result.group(0), Some(Some(0..0)));
	}

	#[test]
	fn test_rematch_is_deterministic() {
		let pattern = regex(r"(\w+)@(\w+)");
		let content = b"mail: a@b and c@d";
		assert_eq!(
			find_first(&pattern, content).unwrap(),
			find_first(&pattern, content).unwrap()
		);
	}

	#[test]
	fn test_texts_of_binary_content() {
		let content = [b'k', b'=', 0xFF, 0xFE, b';'];
		let pattern = regex(r"(?-u)k=([^;]*);");
		let result = find_first(&pattern, &content).unwrap();
		assert_eq!(result.texts(&content)[1], &[0xFF, 0xFE][..]);
	}
}
