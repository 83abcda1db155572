//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{load_config, validate_config, ConfigError, RelayConfig};

#[derive(Debug, Parser)]
#[command(name = "sanctuary-backend")]
#[command(about = "Plain-text relay for the Sanctuary calculation engine", long_about = None)]
pub struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(long)]
    pub bind: Option<String>,

    /// Override `engine.base_url`.
    #[arg(long)]
    pub engine_url: Option<String>,
}

impl Cli {
    /// Load the config file (if any), apply overrides and validate the result.
    pub fn resolve_config(&self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelayConfig::default(),
        };

        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if let Some(url) = &self.engine_url {
            config.engine.base_url = url.clone();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
