//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mock HTTP API for exercising client pagination and bearer auth
#[derive(Parser, Debug)]
#[command(name = "paging-fixture")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Address to listen on (overrides config)
        #[arg(short, long)]
        bind: Option<String>,

        /// Port to listen on (overrides the port of the bind address)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Issue a session token without starting the server
    Token {
        /// Login username
        #[arg(short, long, default_value = "admin")]
        username: String,

        /// Login password
        #[arg(short = 'P', long, default_value = "password")]
        password: String,
    },

    /// Print the effective configuration as YAML
    Config,
}
