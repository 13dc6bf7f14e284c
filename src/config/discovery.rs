use crate::config::parser::parse_settings_file;
use crate::config::types::{LoadedSettings, Settings};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File name of the user settings file in the home directory.
pub const SETTINGS_FILE_NAME: &str = ".sedr.toml";

/// Environment variable that, if truthy, skips the user settings lookup.
pub const NO_CONFIG_ENV_VAR: &str = "SEDR_NO_CONFIG";

/// Resolve the settings for this run.
///
/// The lookup order is:
/// 1. An explicit settings file, which must exist
/// 2. Nothing at all when `skip_lookup` is set or `SEDR_NO_CONFIG` is truthy
/// 3. `~/.sedr.toml` if it exists
/// 4. Built-in defaults
pub fn load_settings(explicit: Option<&Path>, skip_lookup: bool) -> Result<LoadedSettings> {
	if let Some(path) = explicit {
		return Ok(LoadedSettings {
			settings: parse_settings_file(path)?,
			path: Some(path.to_path_buf()),
		});
	}

	if skip_lookup || is_env_truthy(NO_CONFIG_ENV_VAR) {
		return Ok(LoadedSettings::default());
	}

	match user_settings_path() {
		Some(path) if path.exists() => Ok(LoadedSettings {
			settings: parse_settings_file(&path)?,
			path: Some(path),
		}),
		_ => Ok(LoadedSettings {
			settings: Settings::default(),
			path: None,
		}),
	}
}

/// Get the path to the user's settings file, if a home directory is known.
pub fn user_settings_path() -> Option<PathBuf> {
	dirs::home_dir().map(|home| home.join(SETTINGS_FILE_NAME))
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}
