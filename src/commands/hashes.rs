use std::path::Path;

use anyhow::{Context, Result};
use hashdeploy::application::DeployOptions;
use hashdeploy::presentation::create_deploy_use_case;

use crate::commands::load_config;
use crate::ui::views::deploy::render_hashes_written;

pub fn cmd_hashes(config: Option<&Path>) -> Result<()> {
    let loaded = load_config(config)?;
    let use_case = create_deploy_use_case(&loaded.config, &loaded.path, DeployOptions::new())?;

    let manifest = use_case
        .refresh_hashes()
        .context("Failed to generate the hash file")?;

    println!("{}", render_hashes_written(manifest.len()));
    Ok(())
}
