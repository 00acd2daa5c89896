//! Configuration errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {path} (run `hashdeploy init` to create one)")]
    NotFound { path: PathBuf },

    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("missing required setting '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("{setting} must be an absolute remote path starting with '/': '{value}'")]
    RelativeRemotePath { setting: String, value: String },

    #[error("{path} already exists. Use --force to overwrite.")]
    AlreadyExists { path: PathBuf },
}
