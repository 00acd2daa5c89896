//! Path mapping rules
//!
//! An ordered list of `local pattern -> remote path` rules. Order is the
//! declaration order and is the only tie-break between rules.

use super::glob_pattern::{GlobPattern, PatternError};

/// How a rule's local side is compared against a relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MappingMode {
    /// No glob metacharacters; the path must equal the key
    Exact,
    /// Glob match
    Pattern(GlobPattern),
}

/// One `local -> remote` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    local: String,
    remote: String,
    mode: MappingMode,
    /// Everything before the last `/` of the local pattern
    dir_portion: Option<DirPortion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DirPortion {
    Literal(String),
    Glob(GlobPattern),
}

impl PathMapping {
    pub fn new(local: impl Into<String>, remote: impl Into<String>) -> Result<Self, PatternError> {
        let local = local.into();
        let mode = if GlobPattern::has_wildcards(&local) {
            MappingMode::Pattern(GlobPattern::new(local.as_str())?)
        } else {
            MappingMode::Exact
        };

        let dir_portion = match local.rfind('/') {
            Some(idx) if idx > 0 => {
                let dir = &local[..idx];
                if GlobPattern::has_wildcards(dir) {
                    Some(DirPortion::Glob(GlobPattern::new(dir)?))
                } else {
                    Some(DirPortion::Literal(dir.to_string()))
                }
            }
            _ => None,
        };

        Ok(Self {
            local,
            remote: remote.into(),
            mode,
            dir_portion,
        })
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Whether this rule applies to `rel_path` (equality for exact rules).
    pub fn matches(&self, rel_path: &str) -> bool {
        match &self.mode {
            MappingMode::Exact => self.local == rel_path,
            MappingMode::Pattern(glob) => glob.matches(rel_path),
        }
    }

    /// Strip the pattern's directory portion from the front of `rel_path`.
    ///
    /// A literal portion is removed when it is a prefix. A portion with
    /// wildcards removes the shortest leading run of whole path segments it
    /// matches. Without a portion, or when nothing lines up, the path is
    /// returned unchanged.
    pub fn strip_dir_portion<'a>(&self, rel_path: &'a str) -> &'a str {
        match &self.dir_portion {
            None => rel_path,
            Some(DirPortion::Literal(dir)) => rel_path
                .strip_prefix(dir.as_str())
                .and_then(|rest| rest.strip_prefix('/'))
                .unwrap_or(rel_path),
            Some(DirPortion::Glob(glob)) => rel_path
                .match_indices('/')
                .map(|(idx, _)| idx)
                .find(|&idx| glob.matches(&rel_path[..idx]))
                .map(|idx| &rel_path[idx + 1..])
                .unwrap_or(rel_path),
        }
    }
}

/// Ordered rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMappings {
    rules: Vec<PathMapping>,
}

impl PathMappings {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile `(local, remote)` pairs, keeping their order.
    pub fn new<I, L, R>(pairs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(local, remote)| PathMapping::new(local, remote))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathMapping> {
        self.rules.iter()
    }

    /// First rule whose key equals `rel_path` verbatim.
    pub fn exact(&self, rel_path: &str) -> Option<&PathMapping> {
        self.rules.iter().find(|rule| rule.local == rel_path)
    }

    /// First rule, in declaration order, that matches `rel_path`.
    pub fn first_match(&self, rel_path: &str) -> Option<&PathMapping> {
        self.rules.iter().find(|rule| rule.matches(rel_path))
    }

    /// Inclusion filter used while scanning: exact key first, then any rule.
    pub fn includes(&self, rel_path: &str) -> bool {
        self.exact(rel_path).is_some() || self.first_match(rel_path).is_some()
    }
}
