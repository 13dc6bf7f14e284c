use memchr::memmem;

/// Token that expands to a literal `$` once all groups are substituted.
pub const LITERAL_DOLLAR: &[u8] = b"$+";

/// Expand a substitution template against the texts of the matched groups.
///
/// Placeholders are substituted one group at a time, in ascending order
/// starting at `$0`, each pass rewriting the output of the previous one.
/// Text inserted for group `i` is therefore scanned again for `$j`, `j > i`,
/// and `$1` also rewrites the prefix of `$10`. `$+` becomes `$` last.
pub fn expand_template(template: &str, groups: &[&[u8]]) -> Vec<u8> {
	let mut expanded = template.as_bytes().to_vec();

	for (index, text) in groups.iter().enumerate() {
		let placeholder = format!("${index}");
		expanded = replace_all(&expanded, placeholder.as_bytes(), text);
	}

	replace_all(&expanded, LITERAL_DOLLAR, b"$")
}

/// Replace every non-overlapping occurrence of `needle`, scanning left to right.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(haystack.len());
	let mut last = 0;

	for pos in memmem::find_iter(haystack, needle) {
		out.extend_from_slice(&haystack[last..pos]);
		out.extend_from_slice(replacement);
		last = pos + needle.len();
	}

	out.extend_from_slice(&haystack[last..]);
	out
}
