//! Path Mapper Domain Service
//!
//! Resolves a local relative path to its remote destination.

use crate::domain::value_objects::PathMappings;

/// Resolves local relative paths to absolute remote paths.
#[derive(Debug, Clone)]
pub struct PathMapper {
    mappings: PathMappings,
    remote_base: String,
}

impl PathMapper {
    pub fn new(mappings: PathMappings, remote_base: impl Into<String>) -> Self {
        Self {
            mappings,
            remote_base: remote_base.into(),
        }
    }

    pub fn remote_base(&self) -> &str {
        &self.remote_base
    }

    /// Resolve `rel_path` to a remote path.
    ///
    /// 1. an exact key wins and its remote path is returned unmodified;
    /// 2. otherwise the first rule in declaration order that matches maps
    ///    the path below its remote directory, minus the pattern's own
    ///    directory portion;
    /// 3. otherwise the path lands below the remote base.
    pub fn resolve(&self, rel_path: &str) -> String {
        if let Some(rule) = self.mappings.exact(rel_path) {
            return rule.remote().to_string();
        }

        if let Some(rule) = self.mappings.first_match(rel_path) {
            return join_remote(rule.remote(), rule.strip_dir_portion(rel_path));
        }

        join_remote(&self.remote_base, rel_path)
    }
}

/// `base` without trailing slashes, then `/`, then `rel`.
pub fn join_remote(base: &str, rel: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), rel)
}

/// Directory part of a remote path: `/a/b/c.txt` gives `/a/b`, `/c.txt` gives `/`.
pub fn remote_parent(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None => "",
    }
}

/// Compare two remote directories ignoring trailing slashes.
pub fn same_remote_dir(a: &str, b: &str) -> bool {
    let a = a.trim_end_matches('/');
    let b = b.trim_end_matches('/');
    a == b
}
