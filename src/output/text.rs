//! Plain-text rendering for the command line

use crate::robots::{MatchReason, MatchResult, RuleGroup, RuleKind, RuleSet};

/// One-line verdict for an access check
pub fn format_decision(result: &MatchResult) -> String {
    format!(
        "Path {} is {} for user-agent {}",
        result.path, result.decision, result.user_agent
    )
}

/// Explains which rule(s) produced a decision
pub fn format_explanation(result: &MatchResult) -> String {
    let group = result.group.as_deref().unwrap_or("-");
    match &result.reason {
        MatchReason::NoDocument => "No robots.txt available; everything is allowed".to_string(),
        MatchReason::NoApplicableGroup => {
            format!("No group for '{}' and no '*' group", result.user_agent)
        }
        MatchReason::NoMatchingRule => format!("Group '{}': no rule matches", group),
        MatchReason::LongestMatch(rule) => format!(
            "Group '{}': longest match {} {} (length {})",
            group,
            kind_label(rule.kind),
            rule.pattern,
            rule.specificity()
        ),
        MatchReason::Tie(rules) => {
            let tied = rules
                .iter()
                .map(|rule| format!("{} {}", kind_label(rule.kind), rule.pattern))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Group '{}': tie between {}; allowed", group, tied)
        }
    }
}

/// Crawl-delay line
pub fn format_crawl_delay(user_agent: &str, delay: Option<f64>) -> String {
    match delay {
        Some(seconds) => format!("Crawl delay for {}: {}", user_agent, seconds),
        None => format!("Crawl delay for {}: none", user_agent),
    }
}

/// Bulleted sitemap list
pub fn format_sitemaps(sitemaps: &[String]) -> String {
    let mut out = String::from("Sitemaps:\n");
    if sitemaps.is_empty() {
        out.push_str("  (none)\n");
    }
    for sitemap in sitemaps {
        out.push_str(&format!("  - {}\n", sitemap));
    }
    out
}

/// Every group with its rules and delay
pub fn format_rules(rules: &RuleSet) -> String {
    if rules.is_empty() {
        return "No user-agent groups declared\n".to_string();
    }

    rules
        .groups()
        .iter()
        .map(format_group)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_group(group: &RuleGroup) -> String {
    let mut out = format!("{}:\n", group.user_agent);

    out.push_str("  Allowed paths:\n");
    for pattern in group.allows() {
        out.push_str(&format!("    - {}\n", pattern));
    }

    out.push_str("  Disallowed paths:\n");
    for pattern in group.disallows() {
        out.push_str(&format!("    - {}\n", pattern));
    }

    if let Some(delay) = group.crawl_delay {
        out.push_str(&format!("  Crawl delay: {}\n", delay));
    }

    out
}

fn kind_label(kind: RuleKind) -> &'static str {
    match kind {
        RuleKind::Allow => "Allow",
        RuleKind::Disallow => "Disallow",
    }
}
