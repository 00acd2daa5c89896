//! Configuration module for hashdeploy
//!
//! Settings are resolved in this order:
//! 1. Environment variables (HASHDEPLOY_*)
//! 2. Config file (`deploy.toml`, or `--config <PATH>`)
//! 3. Built-in defaults

mod error;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use error::ConfigError;
pub use loader::{
    apply_env_overrides, load_with_warnings, with_env_overrides, write_template,
    DEFAULT_CONFIG_FILE,
};
pub use types::{
    Config, MappingConfig, DEFAULT_HASH_FILE, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, TEMPLATE,
};
