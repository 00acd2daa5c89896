//! Error types for hashdeploy
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ports::{ManifestError, RemoteError};
use crate::domain::value_objects::PatternError;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Fatal errors that abort a deploy run.
///
/// Per-file upload and delete failures are not represented here; they are
/// collected into the run report instead.
#[derive(Error, Debug)]
pub enum DeployError {
    /// Configuration could not be loaded or is incomplete
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An ignore or mapping pattern failed to compile
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Local root directory does not exist
    #[error("local directory not found: {path}")]
    LocalRootNotFound { path: PathBuf },

    /// A local file could not be read for hashing
    #[error("could not hash {path}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest could not be written
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Opening the remote session failed (connection or authentication)
    #[error(transparent)]
    Session(RemoteError),

    /// A remote directory could not be created
    #[error("could not create remote directory {dir}: {source}")]
    DirectoryCreate {
        dir: String,
        #[source]
        source: RemoteError,
    },

    /// Reading the operator's answer failed
    #[error("could not read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}
