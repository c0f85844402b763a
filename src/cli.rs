//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::feed::TriggerMode;

#[derive(Parser, Debug, Default)]
#[command(name = "scrollfeed", version, about = "Infinite-scroll viewer for paginated JSON endpoints")]
pub struct Cli {
    /// Config file path (default: ~/.config/scrollfeed/config.toml)
    #[arg(short, long, env = "SCROLLFEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the page endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Override the number of items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Load at most one page per approach to the bottom
    #[arg(long)]
    pub latch: bool,

    /// Append logs to this file
    #[arg(long, env = "SCROLLFEED_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(page_size) = self.page_size {
            config.source.page_size = page_size;
        }
        if self.latch {
            config.scroll.trigger = TriggerMode::Latch;
        }
    }

    /// Load config (explicit path or default location), apply overrides,
    /// validate the result.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
