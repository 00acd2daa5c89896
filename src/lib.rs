//! hashdeploy - incremental directory deployment over FTP/FTPS
//!
//! A content-hash manifest records what was last deployed. Each run hashes
//! the local tree, diffs it against the manifest, and transfers only new,
//! modified or deleted files.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployReport, DeployUseCase};
pub use config::{Config, ConfigError, ConfigWarning};
pub use domain::entities::{ChangeSet, Manifest};
pub use error::{DeployError, DeployResult};
