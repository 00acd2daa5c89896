//! Ignore patterns value object
//!
//! A path is ignored when a pattern matches it verbatim, or when the pattern
//! prefixed with `*/` matches it. The second form lets `node_modules` hit
//! `web/node_modules` at any depth.

use super::glob_pattern::{GlobPattern, PatternError};

#[derive(Debug, Clone)]
struct IgnoreRule {
    verbatim: GlobPattern,
    any_depth: GlobPattern,
}

impl IgnoreRule {
    fn new(raw: &str) -> Result<Self, PatternError> {
        Ok(Self {
            verbatim: GlobPattern::new(raw)?,
            any_depth: GlobPattern::new(format!("*/{raw}"))?,
        })
    }

    fn is_match(&self, rel_path: &str) -> bool {
        self.verbatim.matches(rel_path) || self.any_depth.matches(rel_path)
    }
}

/// Ordered set of ignore rules.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    rules: Vec<IgnoreRule>,
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns
            .into_iter()
            .map(|p| IgnoreRule::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Check a root-relative, `/`-separated path.
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(rel_path))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> IgnorePatterns {
        IgnorePatterns::new(list.iter().copied()).unwrap()
    }

    #[test]
    fn empty_patterns_match_nothing() {
        let patterns = IgnorePatterns::empty();
        assert!(!patterns.is_ignored("anything.md"));
        assert!(!patterns.is_ignored("dir/file.md"));
        assert!(patterns.is_empty());
    }

    #[test]
    fn pattern_matches_exact_file() {
        let patterns = patterns(&["README.md"]);
        assert!(patterns.is_ignored("README.md"));
        assert!(!patterns.is_ignored("other.md"));
    }

    #[test]
    fn bare_name_matches_at_any_depth() {
        let patterns = patterns(&["node_modules"]);
        assert!(patterns.is_ignored("node_modules"));
        assert!(patterns.is_ignored("web/node_modules"));
        assert!(patterns.is_ignored("a/b/c/node_modules"));
        assert!(!patterns.is_ignored("node_modules_backup"));
    }

    #[test]
    fn extension_glob_matches_nested_files() {
        let patterns = patterns(&["*.log"]);
        assert!(patterns.is_ignored("error.log"));
        assert!(patterns.is_ignored("storage/logs/error.log"));
        assert!(!patterns.is_ignored("error.log.txt"));
    }

    #[test]
    fn path_pattern_matches_tail() {
        let patterns = patterns(&["config/local.php"]);
        assert!(patterns.is_ignored("config/local.php"));
        assert!(patterns.is_ignored("app/config/local.php"));
        assert!(!patterns.is_ignored("config/prod.php"));
    }

    #[test]
    fn multiple_patterns_work() {
        let patterns = patterns(&[".git", "*.bak", "tests"]);
        assert_eq!(patterns.len(), 3);
        assert!(patterns.is_ignored(".git"));
        assert!(patterns.is_ignored("old.bak"));
        assert!(patterns.is_ignored("tests"));
        assert!(!patterns.is_ignored("src/main.php"));
    }

    #[test]
    fn invalid_pattern_fails_to_compile() {
        let err = IgnorePatterns::new(["ok", "bad["]).unwrap_err();
        assert_eq!(err.pattern, "bad[");
    }
}
