//! CLI module for Mela
//!
//! Provides command-line interface parsing and handling for the mela-server
//! binary. Uses clap for argument parsing and owo-colors for colored terminal
//! output.

pub mod init;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mela - Conversational Marketing Assistant Server
///
/// A guided content-creation chatbot server for small artisans with session
/// management and canned market insights.
#[derive(Parser, Debug)]
#[command(
    name = "mela-server",
    version,
    about = "Mela - Conversational Marketing Assistant Server",
    long_about = "A guided content-creation chatbot server for small artisans.\n\
                  The assistant walks a user from a first message to a ready-to-publish\n\
                  content draft with hashtag recommendations and a performance prediction.\n\n\
                  Run without arguments to start the server.",
    after_help = "EXAMPLES:\n    \
                  mela-server init              # Scaffold a default mela.toml\n    \
                  mela-server                   # Start the server\n    \
                  mela-server --config my.toml  # Use a custom config file\n    \
                  mela-server config --validate # Check the config file"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "mela.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new Mela project with a configuration file
    ///
    /// Creates mela.toml with the default server and session settings.
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing file without prompting
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration information
    Config {
        /// Show the full configuration
        #[arg(short = 'f', long)]
        full: bool,

        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
