//! Value Objects
//!
//! Immutable values compiled from configuration: hashes, globs, rules
//! and configuration warnings.

mod config_warning;
mod glob_pattern;
mod hash;
mod ignore_patterns;
mod path_mapping;

pub use config_warning::ConfigWarning;
pub use glob_pattern::{matches, GlobPattern, PatternError};
pub use hash::ContentHash;
pub use ignore_patterns::IgnorePatterns;
pub use path_mapping::{PathMapping, PathMappings};
