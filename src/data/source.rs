//! Remote monkey catalog client
//!
//! Fetches the monkey list as a JSON array over HTTP. The `MonkeySource`
//! trait lets the cache be driven by something other than the network.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::Monkey;

/// Default location of the monkey catalog
pub const MONKEYS_URL: &str = "https://www.montemagno.com/monkeys.json";

/// Errors that can occur when fetching the monkey catalog
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),

    /// Failed to parse the response body
    #[error("Failed to parse monkey list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Something that can produce the full list of monkeys
#[async_trait]
pub trait MonkeySource {
    /// Fetches every monkey the source knows about, in source order
    async fn fetch_monkeys(&self) -> Result<Vec<Monkey>, FetchError>;
}

/// Fetches monkeys from an HTTP endpoint serving a JSON array
#[derive(Debug, Clone)]
pub struct HttpMonkeySource {
    /// HTTP client for making requests
    client: Client,
    /// Endpoint URL (allows override for testing)
    url: String,
}

impl HttpMonkeySource {
    /// Creates a source pointing at the default catalog URL
    pub fn new() -> Self {
        Self::with_url(MONKEYS_URL)
    }

    /// Creates a source pointing at a custom URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Returns the endpoint this source fetches from
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpMonkeySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MonkeySource for HttpMonkeySource {
    async fn fetch_monkeys(&self) -> Result<Vec<Monkey>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let text = response.text().await?;
        let monkeys: Vec<Monkey> = serde_json::from_str(&text)?;

        Ok(monkeys)
    }
}
