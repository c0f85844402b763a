//! Configuration: TOML file plus CLI overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ScrollConfig, SourceConfig};
