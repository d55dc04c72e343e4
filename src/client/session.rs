//! Bound robots.txt session
//!
//! [`RobotsClient`] pairs a [`RobotsFetcher`] with the [`RobotParser`] facade
//! and a text cache: binding a site fetches its robots.txt (or reuses a
//! fresh cached copy) and every query is then answered from memory.

use crate::client::fetcher::{HttpFetcher, RobotsFetcher};
use crate::config::{Config, MAX_CACHE_TTL_SECS};
use crate::robots::{MatchResult, ParsedRobots, RobotParser, RobotsCache, RuleSet};
use crate::{ConfigError, RobotsError};
use std::sync::Arc;

/// Fetches, caches and queries robots.txt for one bound site at a time
#[derive(Debug)]
pub struct RobotsClient<F = HttpFetcher> {
    fetcher: F,
    parser: RobotParser,
    cache: RobotsCache,
}

impl RobotsClient<HttpFetcher> {
    /// Creates a client that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The application configuration
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsClient)` - Ready to bind
    /// * `Err(RobotsError)` - The HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, RobotsError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: RobotsFetcher> RobotsClient<F> {
    /// Creates a client around any fetcher
    pub fn new(fetcher: F, config: &Config) -> Self {
        let ttl_secs = config.cache.ttl_secs.min(MAX_CACHE_TTL_SECS) as i64;
        let ttl = chrono::Duration::seconds(ttl_secs);
        Self {
            fetcher,
            parser: RobotParser::new(),
            cache: RobotsCache::new(ttl),
        }
    }

    /// Binds a site and loads its robots.txt
    ///
    /// Previously derived state is discarded. A robots.txt that cannot be
    /// retrieved leaves the site unrestricted; it is not an error.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The site is bound
    /// * `Err(ConfigError::InvalidTarget)` - The target is empty or not an
    ///   http(s) URL
    pub async fn bind(&mut self, target: &str) -> Result<(), ConfigError> {
        self.parser.bind(target)?;

        let Some(robots_url) = self.parser.robots_url() else {
            return Ok(());
        };
        let key = robots_url.to_string();

        if self.cache.is_enabled() {
            if let Some(entry) = self.cache.get(&key) {
                tracing::debug!("robots.txt cache hit for {} ({})", key, entry.checksum);
                let content = entry.content.clone();
                self.parser.set_document(Some(content));
                return Ok(());
            }
        }

        let content = self.fetcher.fetch(&robots_url).await;
        if let (Some(text), true) = (&content, self.cache.is_enabled()) {
            let entry = self.cache.insert(&key, text.clone());
            tracing::debug!("Cached robots.txt for {} ({})", key, entry.checksum);
        }
        if content.is_none() {
            tracing::info!("No robots.txt for {}; all paths allowed", key);
        }
        self.parser.set_document(content);

        Ok(())
    }

    /// The underlying facade
    pub fn parser(&self) -> &RobotParser {
        &self.parser
    }

    /// The parsed snapshot of the bound document
    pub fn snapshot(&self) -> Option<Arc<ParsedRobots>> {
        self.parser.snapshot()
    }

    pub fn check(&self, user_agent: &str, path: &str) -> MatchResult {
        self.parser.check(user_agent, path)
    }

    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        self.parser.is_allowed(user_agent, path)
    }

    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        self.parser.crawl_delay(user_agent)
    }

    pub fn sitemaps(&self) -> Vec<String> {
        self.parser.sitemaps()
    }

    pub fn rules(&self) -> RuleSet {
        self.parser.rules()
    }

    /// Drops every cached robots.txt text
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
