//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `extract`: single page and batch extraction
//! - `sites`: URL ↔ identifier conversion
//! - `settings`: config inspection and initialization

mod extract;
mod settings;
mod sites;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::sites::SiteName;

pub use extract::{cmd_batch, cmd_extract};
pub use settings::cmd_config;
pub use sites::{cmd_resolve, cmd_url};

/// Release Scribe CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the one in the OS config directory
    #[arg(long, global = true, env = "RELEASE_SCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract a record from a saved HTML page
    Extract {
        /// Path to the HTML file
        path: PathBuf,
        /// Page URL; picks the site adapter and adds the identifier to the output
        #[arg(short, long)]
        url: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Extract records from every HTML file in a directory (one JSON line each)
    Batch {
        /// Directory containing saved pages
        path: PathBuf,
        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
    /// Print the site and identifier for a URL
    Resolve {
        /// Page URL
        url: String,
    },
    /// Print the canonical URL for an identifier
    Url {
        /// Identifier such as `artist/album` or `artist/album/version`
        identifier: String,
        /// Site the identifier belongs to
        #[arg(long, value_enum, default_value_t = SiteName::RateYourMusic)]
        site: SiteName,
    },
    /// Show the effective configuration
    Config {
        /// Write the configuration to disk
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file when initializing
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Run the parsed CLI command.
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Extract { path, url, pretty } => {
            cmd_extract(config, path, url.as_deref(), *pretty || config.output.pretty)
        }
        Commands::Batch { path, recursive } => cmd_batch(config, path, *recursive),
        Commands::Resolve { url } => cmd_resolve(config, url),
        Commands::Url { identifier, site } => cmd_url(config, *site, identifier),
        Commands::Config { init, force } => {
            cmd_config(config, cli.config.as_deref(), *init, *force)
        }
    }
}
