//! Markdown report generation
//!
//! This module renders a parsed robots.txt as a human-readable markdown
//! report: source, groups with their rules, and declared sitemaps.

use crate::robots::{ParsedRobots, RawDocument, RuleKind};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report to disk
///
/// # Arguments
///
/// * `document` - The raw document, if one was retrieved
/// * `robots` - The parsed robots.txt, if one was retrieved
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(std::io::Error)` - Failed to write the file
pub fn generate_markdown_report(
    document: Option<&RawDocument>,
    robots: Option<&ParsedRobots>,
    output_path: &Path,
) -> std::io::Result<()> {
    let markdown = format_markdown_report(document, robots);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a parsed robots.txt as markdown
pub fn format_markdown_report(document: Option<&RawDocument>, robots: Option<&ParsedRobots>) -> String {
    let mut md = String::new();

    md.push_str("# robots.txt Report\n\n");

    let (Some(document), Some(robots)) = (document, robots) else {
        md.push_str("No robots.txt could be retrieved; all paths are allowed.\n");
        return md;
    };

    md.push_str("## Source\n\n");
    md.push_str(&format!("- **URL**: {}\n", document.url));
    md.push_str(&format!("- **Size**: {} bytes\n", document.content.len()));
    md.push_str(&format!("- **Checksum**: {}\n", robots.checksum()));
    md.push_str(&format!("- **Groups**: {}\n", robots.rules().len()));
    md.push_str(&format!("- **Sitemaps**: {}\n\n", robots.sitemaps().len()));

    md.push_str("## User-Agent Groups\n\n");
    if robots.rules().is_empty() {
        md.push_str("No user-agent groups declared.\n\n");
    }
    for group in robots.rules().groups() {
        md.push_str(&format!("### `{}`\n\n", group.user_agent));
        if let Some(delay) = group.crawl_delay {
            md.push_str(&format!("Crawl delay: {} seconds\n\n", delay));
        }
        if group.rules.is_empty() {
            md.push_str("No rules.\n\n");
            continue;
        }
        md.push_str("| Directive | Pattern |\n");
        md.push_str("|-----------|---------|\n");
        for rule in &group.rules {
            let directive = match rule.kind {
                RuleKind::Allow => "Allow",
                RuleKind::Disallow => "Disallow",
            };
            md.push_str(&format!("| {} | `{}` |\n", directive, rule.pattern));
        }
        md.push('\n');
    }

    if !robots.sitemaps().is_empty() {
        md.push_str("## Sitemaps\n\n");
        for sitemap in robots.sitemaps() {
            md.push_str(&format!("- {}\n", sitemap));
        }
        md.push('\n');
    }

    md
}
