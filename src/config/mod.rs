//! Configuration module for robotxt
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file.
//!
//! # Example
//!
//! ```no_run
//! use robotxt::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robotxt.toml")).unwrap();
//! println!("User-Agent: {}", config.user_agent.header_value());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CacheConfig, Config, FetchConfig, UserAgentConfig, MAX_CACHE_TTL_SECS};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
