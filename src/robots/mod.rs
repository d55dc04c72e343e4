//! Robots.txt handling module
//!
//! Raw text flows one way through this module:
//!
//! ```text
//! raw text -> tokenizer -> groups   -> RuleSet  \
//!                       -> sitemaps -> Vec<String> +-> ParsedRobots -> matcher
//! ```
//!
//! [`RobotParser`] binds a target and owns the parsed snapshot; it never
//! performs network I/O. Fetching lives in [`crate::client`].

mod cache;
mod facade;
mod groups;
mod matcher;
mod parser;
mod sitemaps;
mod tokenizer;

pub use cache::{CachedRobots, RobotsCache};
pub use facade::{RawDocument, RobotParser};
pub use groups::{parse_crawl_delay, Rule, RuleGroup, RuleKind, RuleSet, WILDCARD_AGENT};
pub use matcher::{match_group, pattern_matches, Decision, MatchReason, MatchResult};
pub use parser::{checksum, ParsedRobots};
pub use sitemaps::extract_sitemaps;
pub use tokenizer::{tokenize, Directive, DirectiveKind};

/// Checks if a path is allowed by robots.txt
///
/// # Arguments
///
/// * `robots` - The parsed robots.txt data
/// * `user_agent` - The user agent string
/// * `path` - The path to check
///
/// # Returns
///
/// * `true` - If the path is allowed
/// * `false` - If the path is disallowed
pub fn is_allowed(robots: &ParsedRobots, user_agent: &str, path: &str) -> bool {
    robots.is_allowed(user_agent, &crate::url::normalize_request_path(path))
}
