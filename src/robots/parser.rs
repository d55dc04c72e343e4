//! Parsed robots.txt snapshot
//!
//! This module ties the tokenizer, the rule-group builder and the sitemap
//! extractor together into one immutable value that can answer queries.

use crate::robots::groups::RuleSet;
use crate::robots::matcher::{match_group, MatchReason, MatchResult};
use crate::robots::sitemaps::extract_sitemaps;
use crate::robots::tokenizer::tokenize;
use sha2::{Digest, Sha256};

/// Parsed robots.txt data
///
/// Built once from raw text and never mutated afterwards, so it can be
/// shared read-only across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRobots {
    /// Per-user-agent rules
    rules: RuleSet,
    /// Declared sitemap URLs in order
    sitemaps: Vec<String>,
    /// Hex-encoded SHA-256 of the source text
    checksum: String,
}

impl ParsedRobots {
    /// Parses raw robots.txt content
    ///
    /// # Arguments
    ///
    /// * `content` - The raw robots.txt file content
    ///
    /// # Returns
    ///
    /// A ParsedRobots instance. Parsing never fails; malformed lines are
    /// skipped.
    pub fn from_content(content: &str) -> Self {
        let directives = tokenize(content);
        let rules = RuleSet::from_directives(&directives);
        let sitemaps = extract_sitemaps(content);

        tracing::debug!(
            "Parsed robots.txt: {} directives, {} groups, {} sitemaps",
            directives.len(),
            rules.len(),
            sitemaps.len()
        );

        Self {
            rules,
            sitemaps,
            checksum: checksum(content),
        }
    }

    /// Creates a permissive ParsedRobots that allows everything
    ///
    /// Equivalent to parsing an empty document.
    pub fn allow_all() -> Self {
        Self::from_content("")
    }

    /// Returns the merged rule groups
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the declared sitemap URLs
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Returns the checksum of the source text
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Evaluates a path for a user-agent
    ///
    /// # Arguments
    ///
    /// * `user_agent` - The user-agent token
    /// * `path` - The normalized request path
    ///
    /// # Returns
    ///
    /// The decision and the rule that produced it
    pub fn check(&self, user_agent: &str, path: &str) -> MatchResult {
        match self.rules.select(user_agent) {
            Some(group) => match_group(group, user_agent, path),
            None => MatchResult::unrestricted(user_agent, path, MatchReason::NoApplicableGroup),
        }
    }

    /// Checks if a path is allowed for the given user agent
    ///
    /// # Returns
    ///
    /// * `true` - If the path is allowed
    /// * `false` - If the path is disallowed
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        self.check(user_agent, path).is_allowed()
    }

    /// Gets the crawl delay for a specific user agent
    ///
    /// Uses the same group selection as [`ParsedRobots::check`].
    ///
    /// # Returns
    ///
    /// * `Some(f64)` - The crawl delay in seconds
    /// * `None` - If no group applies or it declares no valid delay
    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        self.rules
            .select(user_agent)
            .and_then(|group| group.crawl_delay)
    }
}

/// Computes the hex-encoded SHA-256 of a document
pub fn checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
