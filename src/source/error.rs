//! Fetch failures.

use thiserror::Error;

/// Why a page could not be fetched.
///
/// Every variant is handled the same way by the loader: logged and
/// swallowed. The split only matters for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("Request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("Page {page} returned HTTP {status}")]
    Status { page: u32, status: u16 },

    /// Body was not a JSON array of items.
    #[error("Page {page} has a malformed body: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reported by a caller-supplied fetch function.
    #[error("Page {page}: {message}")]
    Other { page: u32, message: String },
}

impl FetchError {
    /// Page the failed request was for.
    pub fn page(&self) -> u32 {
        match self {
            FetchError::Transport { page, .. }
            | FetchError::Status { page, .. }
            | FetchError::Decode { page, .. }
            | FetchError::Other { page, .. } => *page,
        }
    }

    /// Short error type string for log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
            FetchError::Other { .. } => "other",
        }
    }
}
