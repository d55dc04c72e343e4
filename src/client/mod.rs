//! Client module for retrieving robots.txt
//!
//! This module contains everything that touches the network:
//! - Building HTTP clients with a proper user agent string
//! - Fetching robots.txt, collapsing every failure to "absent"
//! - Binding a site and caching fetched text between binds

mod fetcher;
mod session;

pub use fetcher::{build_http_client, HttpFetcher, RobotsFetcher};
pub use session::RobotsClient;

use crate::config::Config;
use crate::RobotsError;

/// Fetches and binds robots.txt for a site in one step
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `target` - Site URL or bare domain
///
/// # Returns
///
/// * `Ok(RobotsClient)` - A client bound to `target`
/// * `Err(RobotsError)` - Invalid target or HTTP client construction failure
pub async fn connect(config: &Config, target: &str) -> Result<RobotsClient, RobotsError> {
    let mut client = RobotsClient::from_config(config)?;
    client.bind(target).await?;
    Ok(client)
}
