//! Command handlers

pub mod deploy;
pub mod hashes;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hashdeploy::config::{self, Config, DEFAULT_CONFIG_FILE};

use crate::ui::output::print_config_warnings;

/// Configuration plus the file it came from
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

/// Config path from `--config`, or `deploy.toml` in the working directory
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the config file, print unknown-key warnings, apply env overrides.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = config_path(explicit);
    let (config, warnings) = config::load_with_warnings(&path)?;
    print_config_warnings(&path, &warnings);
    let config = config::with_env_overrides(config)
        .with_context(|| format!("Failed to apply environment overrides to {}", path.display()))?;

    println!("Using config file: {}", path.display());
    Ok(LoadedConfig { config, path })
}
