//! CLI module
//!
//! Command-line interface for running the fixture server.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `token` - Issue a session token offline
//! - `config` - Print the effective configuration

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands};
pub use runner::Runner;
pub use server::{app, router, serve, serve_on, AppState, GOAT_COUNT};
