use serde::{Deserialize, Serialize};

use crate::feed::{TriggerMode, BOTTOM_THRESHOLD_PX};
use crate::source::{DEFAULT_ENDPOINT, DEFAULT_PAGE_SIZE};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

/// Where pages come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint queried with `?_page=N&_limit=page_size`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Items per page (default: 10).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Scroll sentinel tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Distance from the bottom, in pixels, below which the next page loads.
    #[serde(default = "default_threshold")]
    pub threshold_px: u32,
    /// Nominal height of one terminal row in pixels (default: 20).
    #[serde(default = "default_row_height")]
    pub row_height_px: u32,
    /// `every_signal` (default) or `latch`.
    #[serde(default)]
    pub trigger: TriggerMode,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_threshold() -> u32 {
    BOTTOM_THRESHOLD_PX
}

fn default_row_height() -> u32 {
    20
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold(),
            row_height_px: default_row_height(),
            trigger: TriggerMode::default(),
        }
    }
}
