//! Manifest entity - tracks the content hash of every deployed file
//!
//! Pure data: I/O lives behind `ManifestRepository`.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::value_objects::ContentHash;

/// Normalize a root-relative path for manifest keys (always forward slashes).
pub fn normalize_manifest_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Mapping from root-relative path to hex content hash.
///
/// Keys are case-sensitive and unique; `BTreeMap` keeps serialization sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the recorded hash for a path
    pub fn get_hash(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Record a hash, replacing any previous value
    pub fn set(&mut self, path: impl Into<String>, hash: impl Into<String>) {
        self.entries.insert(path.into(), hash.into());
    }

    pub fn set_hash(&mut self, path: impl Into<String>, hash: ContentHash) {
        self.set(path, hash.into_string());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Remove an entry, returning its hash
    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.entries.remove(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Paths recorded here but absent from `current`, in key order.
    pub fn missing_from(&self, current: &Manifest) -> Vec<String> {
        self.keys()
            .filter(|key| !current.contains(key))
            .map(str::to_string)
            .collect()
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl From<BTreeMap<String, String>> for Manifest {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Manifest {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
