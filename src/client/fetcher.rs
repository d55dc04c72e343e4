//! HTTP fetcher implementation
//!
//! This module retrieves robots.txt over HTTP. Every failure mode (transport
//! error, timeout, non-2xx status, undecodable body) collapses to "absent
//! content", which callers treat as "no restrictions".

use crate::config::Config;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Source of robots.txt text
///
/// Implementations return `None` whenever no robots.txt could be retrieved.
#[allow(async_fn_in_trait)]
pub trait RobotsFetcher {
    /// Fetches the robots.txt at `robots_url`
    async fn fetch(&self, robots_url: &Url) -> Option<String>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The application configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use robotxt::client::build_http_client;
/// use robotxt::config::Config;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(config.fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// reqwest-backed robots.txt fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl RobotsFetcher for HttpFetcher {
    async fn fetch(&self, robots_url: &Url) -> Option<String> {
        tracing::info!("Fetching robots.txt from: {}", robots_url);

        let response = match self.client.get(robots_url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!("Request timeout for {}", robots_url);
                } else if e.is_connect() {
                    tracing::warn!("Connection refused for {}", robots_url);
                } else {
                    tracing::warn!("Error fetching {}: {}", robots_url, e);
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                "robots.txt at {} returned HTTP {}; treating as absent",
                robots_url,
                status.as_u16()
            );
            return None;
        }

        match response.text().await {
            Ok(body) => {
                tracing::debug!("Fetched {} bytes from {}", body.len(), robots_url);
                Some(body)
            }
            Err(e) => {
                tracing::warn!("Failed to read robots.txt body from {}: {}", robots_url, e);
                None
            }
        }
    }
}
