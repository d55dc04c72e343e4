//! robotxt: a robots.txt parser and access checker
//!
//! This crate fetches a site's robots.txt and answers the questions a polite
//! crawler asks of it: may this user-agent fetch this path, what crawl-delay
//! applies, and which sitemaps are declared.

pub mod client;
pub mod config;
pub mod output;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for robotxt operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid bind target: {0}")]
    InvalidTarget(#[from] UrlError),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,

    #[error("URL is empty")]
    Empty,
}

/// Result type alias for robotxt operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use client::{HttpFetcher, RobotsClient, RobotsFetcher};
pub use config::Config;
pub use robots::{Decision, MatchResult, ParsedRobots, RobotParser, RuleGroup, RuleSet};
