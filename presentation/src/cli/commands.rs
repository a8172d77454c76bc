//! CLI command definitions

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// CLI arguments for lzdw
#[derive(Parser, Debug)]
#[command(name = "lzdw")]
#[command(author, version, about = "Landing Zone Design Workshop service")]
#[command(long_about = r#"
lzdw turns a Landing Zone Design Workshop questionnaire into a proposed
AWS multi-account architecture, a draw.io diagram, and an interactive
graph view.

Configuration files are loaded from (in priority order):
1. LZDW_* environment variables
2. --config <path>     Explicit config file
3. ./lzdw.toml         Project-level config
4. ~/.config/lzdw/config.toml   Global config

Example:
  lzdw serve --port 3000
  lzdw generate questionnaire.docx --notes "prefers eu-central-1"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config)
        #[arg(long, value_name = "ADDR")]
        host: Option<IpAddr>,

        /// Bind port (overrides config)
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// Generate artifacts from a questionnaire file without a server
    Generate {
        /// Questionnaire file (.docx, or plain text for anything else)
        input: PathBuf,

        /// Extra notes passed alongside the questionnaire
        #[arg(long, value_name = "TEXT")]
        notes: Option<String>,

        /// Directory to write the .drawio and .json artifacts into
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}
