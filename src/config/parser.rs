use crate::config::types::Settings;
use crate::error::{Result, SedrError};
use std::path::Path;

/// Parse a settings file from the given path.
pub fn parse_settings_file(path: &Path) -> Result<Settings> {
	let content = std::fs::read_to_string(path).map_err(|source| SedrError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_settings_str(&content, path)
}

/// Parse settings from a string (useful for testing).
pub fn parse_settings_str(content: &str, path: &Path) -> Result<Settings> {
	toml::from_str(content).map_err(|source| SedrError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_settings() {
		let path = PathBuf::from("test.toml");
		let settings = parse_settings_str("", &path).unwrap();

		assert!(!settings.quiet);
		assert!(settings.sync);
		assert!(settings.regex.unicode);
		assert!(!settings.regex.multi_line);
	}

	#[test]
	fn test_parse_full_settings() {
		let content = r#"
quiet = true
sync = false

[regex]
case-insensitive = true
multi-line = true
dot-matches-new-line = true
crlf = true
unicode = false
"#;
		let path = PathBuf::from("test.toml");
		let settings = parse_settings_str(content, &path).unwrap();

		assert!(settings.quiet);
		assert!(!settings.sync);
		assert!(settings.regex.case_insensitive);
		assert!(settings.regex.multi_line);
		assert!(settings.regex.dot_matches_new_line);
		assert!(settings.regex.crlf);
		assert!(!settings.regex.unicode);
	}

	#[test]
	fn test_unknown_key_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_settings_str("global = true", &path);

		match result.unwrap_err() {
			SedrError::ConfigParse { path, .. } => assert_eq!(path, PathBuf::from("test.toml")),
			other => panic!("Expected ConfigParse error, got {other:?}"),
		}
	}

	#[test]
	fn test_missing_file_is_read_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("absent.toml");

		assert!(matches!(
			parse_settings_file(&path),
			Err(SedrError::ConfigRead { .. })
		));
	}
}
