//! JSON5 config loading with schema checks.

mod schema;


use crate::{ConfigError, RosterConfig};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default config filename.
pub const DEFAULT_CONFIG_FILE: &str = "roster.json5";

impl RosterConfig {
    /// Load a config from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, "config")
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }
}

/// Validate raw JSON against the schema, decode it, then check constraints.
fn config_from_value(value: Value, layer: &str) -> Result<RosterConfig, ConfigError> {
    schema::validate_schema(&value, layer)?;
    let config: RosterConfig = serde_json::from_value(value)?;
    config.validate()?;
    debug!(
        "config loaded (address={}, port={}, docs_enabled={}, seed={})",
        config.server.address, config.server.port, config.docs.enabled, config.store.seed
    );
    Ok(config)
}
