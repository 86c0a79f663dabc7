//! Configuration schema for Roster.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Paths owned by the user routes; docs routes may not shadow them.
const RESERVED_PATHS: &[&str] = &["/", "/users", "/favicon.ico"];

/// Root config for the Roster service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RosterConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl RosterConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> RosterConfigBuilder {
        RosterConfigBuilder::new()
    }

    /// Parsed listen address.
    pub fn ip_addr(&self) -> Result<IpAddr, ConfigError> {
        self.server
            .address
            .parse()
            .map_err(|_| ConfigError::InvalidField {
                path: "server.address".to_string(),
                message: format!("not an IP address: {}", self.server.address),
            })
    }

    /// Check cross-field constraints that the schema pass cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ip_addr()?;
        validate_docs_path(&self.docs.path, "docs.path")?;
        validate_docs_path(&self.docs.spec_path, "docs.spec_path")?;
        if self.docs.path == self.docs.spec_path {
            return Err(ConfigError::InvalidField {
                path: "docs.spec_path".to_string(),
                message: "must differ from docs.path".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_docs_path(value: &str, path: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidField {
        path: path.to_string(),
        message: message.to_string(),
    };
    if !value.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if value.len() > 1 && value.ends_with('/') {
        return Err(invalid("must not end with '/'"));
    }
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '?' | '#'))
    {
        return Err(invalid("contains a character not allowed in a route path"));
    }
    if RESERVED_PATHS.contains(&value) || value.starts_with("/users/") {
        return Err(invalid("collides with a user route"));
    }
    Ok(())
}

/// Builder for assembling a `RosterConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct RosterConfigBuilder {
    config: RosterConfig,
}

impl RosterConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: RosterConfig::default(),
        }
    }

    /// Replace the listen address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.config.server.address = address.into();
        self
    }

    /// Replace the listen port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Replace the docs configuration.
    pub fn docs(mut self, docs: DocsConfig) -> Self {
        self.config.docs = docs;
        self
    }

    /// Toggle the seed records.
    pub fn seed(mut self, seed: bool) -> Self {
        self.config.store.seed = seed;
        self
    }

    /// Finalize and return the built `RosterConfig`.
    pub fn build(self) -> RosterConfig {
        self.config
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Interactive API documentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Path of the Swagger UI page.
    #[serde(default = "default_docs_path")]
    pub path: String,
    /// Path of the OpenAPI document the page loads.
    #[serde(default = "default_spec_path")]
    pub spec_path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_docs_path(),
            spec_path: default_spec_path(),
        }
    }
}

fn default_docs_path() -> String {
    "/apidocs".to_string()
}

fn default_spec_path() -> String {
    "/apispec_1.json".to_string()
}

/// Record store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Start with the five seed records.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

fn default_true() -> bool {
    true
}
