//! HTTP page source: `GET <endpoint>?_page={page}&_limit={size}`.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::config::{ConfigError, SourceConfig};

use super::{FetchError, Item, PageSource};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Fetches pages from a JSON endpoint that understands `_page`/`_limit`.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    endpoint: Url,
    page_size: u32,
}

impl HttpPageSource {
    pub fn new(client: Client, endpoint: Url, page_size: u32) -> Self {
        Self {
            client,
            endpoint,
            page_size,
        }
    }

    /// Build a source with its own client, timeouts taken from config.
    pub fn from_config(config: &SourceConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self::new(client, endpoint, config.page_size))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// URL for one page. Existing query parameters on the endpoint are kept.
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("_page", &page.to_string())
            .append_pair("_limit", &self.page_size.to_string());
        url
    }

    async fn get_page(&self, page: u32) -> Result<Vec<Item>, FetchError> {
        let url = self.page_url(page);
        tracing::debug!(page, %url, "GET page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                page,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { page, source })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Vec<Item>, FetchError>> + Send {
        self.get_page(page)
    }
}
