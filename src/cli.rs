use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// hashdeploy - incremental directory deployment over FTP/FTPS
#[derive(Parser, Debug)]
#[command(name = "hashdeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'hashdeploy init' to create a deploy.toml template.")]
pub struct Cli {
    /// Config file (defaults to ./deploy.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload changed files and delete removed ones (default)
    Deploy {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Keep failed transfers pending for the next run
        #[arg(long)]
        strict: bool,
    },

    /// Rebuild the hash manifest without transferring anything
    Hashes,

    /// Create a template deploy.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
