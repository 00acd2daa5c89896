//! Glob pattern value object
//!
//! Shell-style matching shared by ignore rules and path mappings. Unlike
//! gitignore globs, `*` also matches `/`, so `*/node_modules` matches the
//! directory at any depth.
//!
//! Patterns are written in `fnmatch` syntax. Two forms the `glob` crate
//! reads differently are rewritten before compiling: a run of `*` is a
//! single `*` (it already crosses `/`), and `[^...]` negates like `[!...]`.

use std::fmt;

use glob::{MatchOptions, Pattern};
use thiserror::Error;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A pattern failed to compile.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid pattern '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

/// A compiled whole-string glob.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    compiled: Pattern,
}

impl GlobPattern {
    pub fn new(raw: impl Into<String>) -> Result<Self, PatternError> {
        let raw = raw.into();
        let compiled = Pattern::new(&to_glob_syntax(&raw)).map_err(|e| PatternError {
            pattern: raw.clone(),
            message: e.msg.to_string(),
        })?;
        Ok(Self { raw, compiled })
    }

    /// Whole-string match of `path` against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.compiled.matches_with(path, MATCH_OPTIONS)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the raw text contains `*`, `?` or `[`.
    pub fn has_wildcards(raw: &str) -> bool {
        raw.contains(['*', '?', '['])
    }
}

fn to_glob_syntax(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                out.push('*');
            }
            '[' => {
                out.push('[');
                if chars.next_if(|&c| c == '^' || c == '!').is_some() {
                    out.push('!');
                }
                // A leading `]` is a class member, not the end of the class
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
                for c in chars.by_ref() {
                    out.push(c);
                    if c == ']' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for GlobPattern {}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One-shot match. An invalid pattern matches nothing.
pub fn matches(pattern: &str, path: &str) -> bool {
    GlobPattern::new(pattern)
        .map(|p| p.matches(path))
        .unwrap_or(false)
}
