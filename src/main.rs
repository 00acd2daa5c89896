//! hashdeploy CLI
//!
//! Usage: hashdeploy [COMMAND]
//!
//! Commands:
//!   deploy  Upload changed files and delete removed ones (default)
//!   hashes  Rebuild the hash manifest only
//!   init    Create a template deploy.toml

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        None => commands::deploy::cmd_deploy(config, false, false),
        Some(Commands::Deploy { yes, strict }) => commands::deploy::cmd_deploy(config, yes, strict),
        Some(Commands::Hashes) => commands::hashes::cmd_hashes(config),
        Some(Commands::Init { force }) => commands::init::cmd_init(config, force),
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the -v level.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
