//! Sitemap extraction
//!
//! `Sitemap` directives are not scoped to a user-agent and may appear
//! anywhere in the file, so they are collected straight from the raw text.

use crate::robots::tokenizer::{tokenize, DirectiveKind};
use url::Url;

/// Collects every declared sitemap URL, in order
///
/// Values that are not absolute http(s) URLs are skipped. Duplicates are
/// preserved as declared.
///
/// # Examples
///
/// ```
/// use robotxt::robots::extract_sitemaps;
///
/// let sitemaps = extract_sitemaps("Sitemap: https://a.com/x.xml\nsitemap: /relative.xml");
/// assert_eq!(sitemaps, vec!["https://a.com/x.xml".to_string()]);
/// ```
pub fn extract_sitemaps(content: &str) -> Vec<String> {
    tokenize(content)
        .into_iter()
        .filter(|directive| directive.kind == DirectiveKind::Sitemap)
        .filter_map(|directive| {
            if is_absolute_http_url(&directive.value) {
                Some(directive.value)
            } else {
                tracing::debug!(
                    "Skipping malformed sitemap '{}' on line {}",
                    directive.value,
                    directive.line
                );
                None
            }
        })
        .collect()
}

fn is_absolute_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
