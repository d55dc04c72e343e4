//! Robots.txt caching implementation
//!
//! Caches fetched robots.txt text per target URL so that rebinding a site
//! within the TTL does not fetch it again.

use crate::robots::parser::checksum;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Cached robots.txt text for a target
#[derive(Debug, Clone)]
pub struct CachedRobots {
    /// The raw robots.txt content
    pub content: String,

    /// Hex-encoded SHA-256 of the content
    pub checksum: String,

    /// When the robots.txt was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CachedRobots {
    /// Creates a new CachedRobots instance stamped with the current time
    pub fn new(content: String) -> Self {
        Self {
            checksum: checksum(&content),
            content,
            fetched_at: Utc::now(),
        }
    }

    /// Returns the age of the cached robots.txt
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }

    /// Checks if the entry is older than `ttl`
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}

/// In-memory robots.txt cache keyed by target URL
#[derive(Debug, Clone)]
pub struct RobotsCache {
    entries: HashMap<String, CachedRobots>,
    ttl: Duration,
}

impl RobotsCache {
    /// Creates an empty cache
    ///
    /// # Arguments
    ///
    /// * `ttl` - How long an entry stays fresh; zero disables caching
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.ttl > Duration::zero()
    }

    /// Returns the fresh entry for `key`, evicting it if stale
    pub fn get(&mut self, key: &str) -> Option<&CachedRobots> {
        let stale = self.entries.get(key)?.is_stale(self.ttl);
        if stale {
            tracing::debug!("Evicting stale robots.txt cache entry for {}", key);
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key)
    }

    /// Stores fetched text for `key`, sweeping out every stale entry
    pub fn insert(&mut self, key: &str, content: String) -> &CachedRobots {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(ttl));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} stale robots.txt cache entries", evicted);
        }

        let entry = CachedRobots::new(content);
        self.entries.insert(key.to_string(), entry);
        &self.entries[key]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
