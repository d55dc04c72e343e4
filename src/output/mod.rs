//! Output module for presenting robots.txt results
//!
//! This module handles:
//! - Plain-text verdicts, explanations and rule listings for the CLI
//! - Markdown reports of a parsed robots.txt

mod markdown;
mod text;

pub use markdown::{format_markdown_report, generate_markdown_report};
pub use text::{
    format_crawl_delay, format_decision, format_explanation, format_rules, format_sitemaps,
};
