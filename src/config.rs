//! Server configuration
//!
//! Configuration is layered: built-in defaults, then an optional YAML file,
//! then environment variables, then CLI flags (applied by the runner).
//!
//! ```yaml
//! bind: "127.0.0.1:3000"
//! auth:
//!   username: admin
//!   password: password
//!   secret: cribl
//!   token_lifetime_seconds: 300
//! collection:
//!   max_size: 100000
//! ```

use crate::auth::Credentials;
use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable overriding the token signing secret
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Environment variable overriding the login username
pub const ENV_USERNAME: &str = "FIXTURE_USERNAME";

/// Environment variable overriding the login password
pub const ENV_PASSWORD: &str = "FIXTURE_PASSWORD";

/// Environment variable overriding the bind address
pub const ENV_BIND: &str = "FIXTURE_BIND";

// ============================================================================
// Root Config
// ============================================================================

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Login credentials and token signing
    #[serde(default)]
    pub auth: AuthSettings,

    /// Limits on generated collections
    #[serde(default)]
    pub collection: CollectionSettings,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            auth: AuthSettings::default(),
            collection: CollectionSettings::default(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

impl FixtureConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }

    /// Apply overrides from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(secret) = lookup(ENV_JWT_SECRET) {
            self.auth.secret = secret;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            self.auth.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD) {
            self.auth.password = password;
        }
        if let Some(bind) = lookup(ENV_BIND) {
            self.bind = bind;
        }
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.auth.secret.is_empty() {
            return Err(Error::config("auth.secret must not be empty"));
        }
        if self.auth.token_lifetime_seconds == 0 {
            return Err(Error::config("auth.token_lifetime_seconds must be > 0"));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| Error::config(format!("Invalid bind address '{}': {e}", self.bind)))
    }
}

// ============================================================================
// Auth Settings
// ============================================================================

/// Credential pair and token signing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Accepted login username
    #[serde(default = "default_username")]
    pub username: String,

    /// Accepted login password
    #[serde(default = "default_password")]
    pub password: String,

    /// HMAC secret for signing tokens
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_seconds: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            secret: default_secret(),
            token_lifetime_seconds: default_token_lifetime(),
        }
    }
}

impl AuthSettings {
    /// The login credential pair
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_secret() -> String {
    "cribl".to_string()
}

fn default_token_lifetime() -> u64 {
    300
}

// ============================================================================
// Collection Settings
// ============================================================================

/// Limits applied to the `size` query parameter
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectionSettings {
    /// Largest accepted `size`
    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
        }
    }
}

fn default_max_size() -> u64 {
    100_000
}
