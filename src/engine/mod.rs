//! Substitution engine for sedr.
//!
//! This module handles:
//! - Pattern compilation for byte-oriented matching
//! - Group selector parsing and span selection
//! - First-match lookup with capture group offsets
//! - Sequential placeholder expansion of the substitution template

pub mod matcher;
pub mod pattern;
pub mod selector;
pub mod span;
pub mod template;

pub use matcher::{MatchResult, find_first};
pub use pattern::compile_pattern;
pub use selector::parse_selector;
pub use span::select_span;
pub use template::expand_template;
