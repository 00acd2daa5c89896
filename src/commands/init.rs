//! Init command - write a template deploy.toml

use std::path::Path;

use anyhow::Result;
use hashdeploy::config::write_template;

use crate::commands::config_path;

pub fn cmd_init(config: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path(config);
    write_template(&path, force)?;

    println!("Created configuration file: {}", path.display());
    println!("Please edit the file and update your FTP credentials before deploying.");
    Ok(())
}
