//! Query facade
//!
//! [`RobotParser`] owns the currently bound target, the raw document fetched
//! for it, and a lazily built [`ParsedRobots`] snapshot. Binding a new target
//! drops all of it; the next query re-parses.

use crate::robots::matcher::{MatchReason, MatchResult};
use crate::robots::parser::ParsedRobots;
use crate::robots::groups::RuleSet;
use crate::url::{normalize_request_path, normalize_target, robots_url};
use crate::ConfigError;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use url::Url;

/// Raw robots.txt text and the location it was retrieved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub url: Url,
    pub content: String,
}

/// Binds a site and answers access queries against its robots.txt
///
/// Queries fail open: with no target bound, or when no robots.txt could be
/// retrieved, every path is allowed, no crawl-delay applies, and no sitemaps
/// are declared.
///
/// # Example
///
/// ```
/// use robotxt::RobotParser;
///
/// let mut parser = RobotParser::new();
/// parser.bind("https://example.com").unwrap();
/// parser.set_document(Some("User-agent: *\nDisallow: /private/".to_string()));
///
/// assert!(parser.is_allowed("mybot", "/index.html"));
/// assert!(!parser.is_allowed("mybot", "/private/data"));
/// ```
#[derive(Debug, Default)]
pub struct RobotParser {
    target: Option<Url>,
    document: Option<RawDocument>,
    parsed: OnceCell<Arc<ParsedRobots>>,
}

impl RobotParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current target and clears any cached parse state
    ///
    /// # Arguments
    ///
    /// * `target` - Site URL or bare domain (e.g. `example.com`)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The target was bound
    /// * `Err(ConfigError::InvalidTarget)` - The target is empty or not an
    ///   http(s) URL; the previous binding is left untouched
    pub fn bind(&mut self, target: &str) -> Result<(), ConfigError> {
        let url = normalize_target(target)?;
        tracing::debug!("Binding robots parser to {}", url);
        self.target = Some(url);
        self.document = None;
        self.parsed = OnceCell::new();
        Ok(())
    }

    /// The currently bound target
    pub fn target(&self) -> Option<&Url> {
        self.target.as_ref()
    }

    /// Where the robots.txt for the bound target lives
    pub fn robots_url(&self) -> Option<Url> {
        self.target.as_ref().map(robots_url)
    }

    /// Supplies the fetched robots.txt text for the bound target
    ///
    /// `None` means no robots.txt could be retrieved and is treated as "no
    /// restrictions". Ignored when no target is bound.
    pub fn set_document(&mut self, content: Option<String>) {
        self.parsed = OnceCell::new();
        self.document = match (self.robots_url(), content) {
            (Some(url), Some(content)) => Some(RawDocument { url, content }),
            (None, Some(_)) => {
                tracing::warn!("Ignoring robots.txt content supplied without a bound target");
                None
            }
            _ => None,
        };
    }

    /// The raw document currently bound, if any
    pub fn document(&self) -> Option<&RawDocument> {
        self.document.as_ref()
    }

    /// Returns the parsed snapshot, parsing on first use
    ///
    /// The snapshot is immutable and can be handed to other threads.
    pub fn snapshot(&self) -> Option<Arc<ParsedRobots>> {
        let document = self.document.as_ref()?;
        let parsed = self
            .parsed
            .get_or_init(|| Arc::new(ParsedRobots::from_content(&document.content)));
        Some(Arc::clone(parsed))
    }

    /// Evaluates a path for a user-agent and explains the outcome
    pub fn check(&self, user_agent: &str, path: &str) -> MatchResult {
        let path = normalize_request_path(path);
        match self.snapshot() {
            Some(robots) => robots.check(user_agent, &path),
            None => MatchResult::unrestricted(user_agent, &path, MatchReason::NoDocument),
        }
    }

    /// Whether `user_agent` may fetch `path`
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        self.check(user_agent, path).is_allowed()
    }

    /// Crawl delay in seconds for `user_agent`, if one applies
    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        self.snapshot()?.crawl_delay(user_agent)
    }

    /// Declared sitemap URLs, in order
    pub fn sitemaps(&self) -> Vec<String> {
        self.snapshot()
            .map(|robots| robots.sitemaps().to_vec())
            .unwrap_or_default()
    }

    /// Merged rule groups of the bound document
    pub fn rules(&self) -> RuleSet {
        self.snapshot()
            .map(|robots| robots.rules().clone())
            .unwrap_or_default()
    }
}
