//! Content Hash Value Object
//!
//! A digest of a file's bytes, used for change detection in the manifest.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps the lower-case hex SHA-256 digest of a file. Stored in the manifest
/// without any prefix, so the manifest stays a plain path-to-hex mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash an in-memory byte slice
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Hash everything a reader yields, streaming
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// Hash a file on disk without loading it fully into memory
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
