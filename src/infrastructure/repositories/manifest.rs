//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port as a pretty-printed JSON object
//! mapping relative paths to hex hashes.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::domain::entities::Manifest;
use crate::domain::ports::{ManifestError, ManifestRepository, ManifestResult};

/// JSON-based manifest repository
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestRepository;

impl JsonManifestRepository {
    pub fn new() -> Self {
        Self
    }

    fn parse(content: &str, path: &Path) -> ManifestResult<Manifest> {
        let invalid = |message: String| ManifestError::InvalidFormat {
            path: path.to_path_buf(),
            message,
        };

        match serde_json::from_str::<Value>(content).map_err(|e| invalid(e.to_string()))? {
            Value::Object(map) => {
                let mut entries = BTreeMap::new();
                for (key, value) in map {
                    match value {
                        Value::String(hash) => {
                            entries.insert(key, hash);
                        }
                        other => {
                            return Err(invalid(format!(
                                "entry '{key}' is not a string hash: {other}"
                            )))
                        }
                    }
                }
                Ok(Manifest::from(entries))
            }
            // An empty mapping written by tools that encode it as a list
            Value::Array(items) if items.is_empty() => Ok(Manifest::new()),
            other => Err(invalid(format!("expected an object, found {other}"))),
        }
    }
}

impl ManifestRepository for JsonManifestRepository {
    fn load(&self, path: &Path) -> ManifestResult<Manifest> {
        if !path.exists() {
            return Ok(Manifest::new());
        }

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()> {
        let io_err = |source: std::io::Error| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut content = serde_json::to_string_pretty(manifest.as_map())
            .map_err(|e| io_err(std::io::Error::other(e)))?;
        content.push('\n');

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_err)?;

        // Temp file in the same directory so the rename stays atomic
        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(content.as_bytes()).map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
