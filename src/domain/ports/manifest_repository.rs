//! ManifestRepository port - abstraction for manifest persistence
//!
//! Lets the change detector load and save the manifest without knowing the
//! on-disk format.

use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug)]
pub enum ManifestError {
    /// Manifest exists but is not a valid path-to-hash mapping
    InvalidFormat { path: PathBuf, message: String },
    /// I/O error while reading or writing
    Io { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::InvalidFormat { path, message } => {
                write!(f, "invalid manifest {}: {}", path.display(), message)
            }
            ManifestError::Io { path, source } => {
                write!(f, "manifest I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Io { source, .. } => Some(source),
            ManifestError::InvalidFormat { .. } => None,
        }
    }
}

/// Abstract repository for manifest persistence
pub trait ManifestRepository {
    /// Load the manifest; a missing file is an empty manifest
    fn load(&self, path: &Path) -> ManifestResult<Manifest>;

    /// Overwrite the manifest file
    fn save(&self, manifest: &Manifest, path: &Path) -> ManifestResult<()>;
}
