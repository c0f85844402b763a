use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::{Config, SourceConfig};

/// Why a config could not be produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl Config {
    /// `<config_dir>/scrollfeed/config.toml`, or `./scrollfeed/config.toml`
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scrollfeed")
            .join("config.toml")
    }

    /// Config from the default location. No file there means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        match path.try_exists() {
            Ok(true) => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Endpoint must be an absolute http(s) URL; page size and row height
    /// must be non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.endpoint_url()?;

        if self.source.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "source.page_size must be at least 1".to_string(),
            });
        }

        if self.scroll.row_height_px == 0 {
            return Err(ConfigError::ValidationError {
                message: "scroll.row_height_px must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl SourceConfig {
    /// Parsed endpoint, rejecting anything that is not http(s).
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.endpoint).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid source.endpoint '{}': {}", self.endpoint, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::ValidationError {
                message: format!(
                    "Invalid source.endpoint '{}': unsupported scheme '{}'",
                    self.endpoint, other
                ),
            }),
        }
    }
}
