//! Configuration for sedr.
//!
//! This module handles:
//! - Building the per-run substitution request from positional arguments
//! - TOML settings file parsing
//! - Settings file lookup

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{NO_CONFIG_ENV_VAR, load_settings, user_settings_path};
pub use parser::{parse_settings_file, parse_settings_str};
pub use types::{Config, DEFAULT_SELECTOR, LoadedSettings, RegexSettings, Settings};
