//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "ticketeer",
    about = "Natural-language gateway for an issue tracker",
    version
)]
pub struct Cli {
    /// Path to a configuration file (defaults to ticketeer.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Process one request and print the result envelope as JSON
    Ask {
        /// The request, e.g. "show me open tickets assigned to me"
        text: Vec<String>,
    },

    /// Run the HTTP server
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the tools the remote MCP server advertises
    Tools,
}
