//! CLI runner - executes commands

use crate::auth::TokenIssuer;
use crate::cli::commands::{Cli, Commands};
use crate::config::FixtureConfig;
use crate::error::Result;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve { bind, port } => {
                let config = self.server_config(bind.as_deref(), *port)?;
                crate::cli::serve(config).await
            }
            Commands::Token { username, password } => self.token(username, password),
            Commands::Config => self.print_config(),
        }
    }

    /// Defaults, then the config file, then the environment
    fn load_config(&self) -> Result<FixtureConfig> {
        let config = match &self.cli.config {
            Some(path) => FixtureConfig::load(path)?,
            None => FixtureConfig::default(),
        };
        let config = config.with_env();
        config.validate()?;
        Ok(config)
    }

    /// Loaded config with CLI flag overrides on top
    fn server_config(&self, bind: Option<&str>, port: Option<u16>) -> Result<FixtureConfig> {
        let mut config = self.load_config()?;

        if let Some(bind) = bind {
            config.bind = bind.to_string();
        }
        if let Some(port) = port {
            let mut addr = config.socket_addr()?;
            addr.set_port(port);
            config.bind = addr.to_string();
        }

        config.validate()?;
        tracing::info!(
            bind = %config.bind,
            username = %config.auth.username,
            token_lifetime_seconds = config.auth.token_lifetime_seconds,
            max_size = config.collection.max_size,
            "configuration loaded"
        );
        Ok(config)
    }

    fn token(&self, username: &str, password: &str) -> Result<()> {
        let config = self.load_config()?;
        let issued = TokenIssuer::new(&config.auth).issue(username, password)?;

        if self.cli.verbose {
            if let Some(expires_at) = issued.expires_at() {
                eprintln!("Token for '{}' expires at {}", issued.claims.sub, expires_at);
            }
        }
        println!("{}", issued.token);
        Ok(())
    }

    fn print_config(&self) -> Result<()> {
        let config = self.load_config()?;
        print!("{}", serde_yaml::to_string(&config)?);
        Ok(())
    }
}
