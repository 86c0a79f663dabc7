//! `roster` binary: serve the user records API.

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use roster::config::{DEFAULT_CONFIG_FILE, RosterConfig};
use std::path::{Path, PathBuf};

/// Command-line options for the Roster server.
#[derive(Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// Path to a roster.json5 config file (defaults to ./roster.json5 when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address override
    #[arg(long)]
    address: Option<String>,
    /// Listen port override
    #[arg(long)]
    port: Option<u16>,
    /// Start with an empty store instead of the seed records
    #[arg(long)]
    no_seed: bool,
    /// Do not serve the API docs
    #[arg(long)]
    no_docs: bool,
}

impl Cli {
    /// Load the config file, then layer CLI overrides on top.
    fn resolve_config(&self) -> anyhow::Result<RosterConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => RosterConfig::load_from_path(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                RosterConfig::load_from_path(DEFAULT_CONFIG_FILE)
                    .context("failed to load config from working directory")?
            }
            None => {
                debug!("no config file found, using defaults");
                RosterConfig::default()
            }
        };
        if let Some(address) = self.address.clone() {
            config.server.address = address;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.no_seed {
            config.store.seed = false;
        }
        if self.no_docs {
            config.docs.enabled = false;
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

/// Entry point for the Roster server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    roster::init_logging();

    let cli = Cli::parse();
    info!(
        "starting roster (config_set={}, address_set={}, port_set={})",
        cli.config.is_some(),
        cli.address.is_some(),
        cli.port.is_some()
    );
    let config = cli.resolve_config()?;
    let store = roster::store_for(&config);
    roster::server::serve(&config, store)
        .await
        .context("server exited with an error")?;
    Ok(())
}
