//! End-to-end query tests on in-memory robots.txt text

use robotxt::robots::{self, tokenize, Decision, MatchReason, ParsedRobots, RuleSet};
use robotxt::RobotParser;

fn bound(content: &str) -> RobotParser {
    let mut parser = RobotParser::new();
    parser.bind("https://example.com").unwrap();
    parser.set_document(Some(content.to_string()));
    parser
}

#[test]
fn test_fail_open_without_rules() {
    let paths = ["/", "/a", "/private/x", "/deep/nested/path?q=1"];

    let unbound = RobotParser::new();
    let empty = bound("");
    let comments_only = bound("# nothing to see here\n\n");

    for parser in [&unbound, &empty, &comments_only] {
        for path in paths {
            assert!(parser.is_allowed("anybot", path));
            assert!(parser.is_allowed("*", path));
        }
        assert_eq!(parser.crawl_delay("anybot"), None);
        assert!(parser.sitemaps().is_empty());
    }
}

#[test]
fn test_empty_document_round_trip() {
    let rules = RuleSet::from_directives(&tokenize(""));
    assert!(rules.is_empty());
    assert!(rules.select("anybot").is_none());
}

#[test]
fn test_allow_root_allows_every_path() {
    let parser = bound("User-agent: *\nAllow: /\nDisallow: /x");
    assert!(parser.is_allowed("bot", "/"));
    assert!(parser.is_allowed("bot", "/y/z"));
    // Longer Disallow still wins over the root Allow
    assert!(!parser.is_allowed("bot", "/x/1"));
}

#[test]
fn test_most_specific_rule_wins() {
    let parser = bound("User-agent: *\nDisallow: /private/\nAllow: /private/public/");
    let result = parser.check("bot", "/private/public/page.html");
    assert_eq!(result.decision, Decision::Allowed);
    assert_eq!(result.winning_rule().unwrap().pattern, "/private/public/");
    assert!(!parser.is_allowed("bot", "/private/page.html"));
}

#[test]
fn test_duplicate_user_agent_blocks_accumulate() {
    let parser = bound("User-agent: bot\nAllow: /a/\n\nUser-agent: bot\nDisallow: /b/");
    let rules = parser.rules();
    let group = rules.group("bot").unwrap();
    assert_eq!(group.allows().collect::<Vec<_>>(), vec!["/a/"]);
    assert_eq!(group.disallows().collect::<Vec<_>>(), vec!["/b/"]);
    assert!(!parser.is_allowed("bot", "/b/page"));
    assert!(parser.is_allowed("bot", "/a/page"));
}

#[test]
fn test_crawl_delay_values() {
    assert_eq!(bound("User-agent: *\nCrawl-delay: 10").crawl_delay("bot"), Some(10.0));
    assert_eq!(bound("User-agent: *\nCrawl-delay: abc").crawl_delay("bot"), None);
}

#[test]
fn test_sitemaps_keep_declaration_order() {
    let parser = bound("Sitemap: https://x.example.com/a.xml\nUser-agent: *\nSitemap: https://y.example.com/b.xml");
    assert_eq!(
        parser.sitemaps(),
        vec![
            "https://x.example.com/a.xml".to_string(),
            "https://y.example.com/b.xml".to_string()
        ]
    );
}

#[test]
fn test_user_agent_case_insensitive() {
    let parser = bound("User-agent: GoogleBot\nDisallow: /nogoogle");
    assert!(!parser.is_allowed("googlebot", "/nogoogle"));
    assert!(parser.is_allowed("otherbot", "/nogoogle"));
}

#[test]
fn test_tie_is_allowed() {
    let parser = bound("User-agent: *\nAllow: /folder\nDisallow: /folder");
    let result = parser.check("bot", "/folder/page");
    assert!(result.is_allowed());
    assert!(matches!(result.reason, MatchReason::Tie(_)));
}

#[test]
fn test_wildcard_and_anchor_patterns() {
    let parser = bound("User-agent: *\nDisallow: /*.pdf$\nDisallow: /search*q=\nAllow: /search/help$");
    assert!(!parser.is_allowed("bot", "/docs/manual.pdf"));
    assert!(parser.is_allowed("bot", "/docs/manual.pdf.html"));
    assert!(!parser.is_allowed("bot", "/search?q=rust"));
    assert!(parser.is_allowed("bot", "/search/help"));
}

#[test]
fn test_real_world_document() {
    let content = "\
# robots.txt for example.com
User-agent: *
Disallow: /cgi-bin/
Disallow: /tmp/
Disallow:

User-agent: Googlebot
Allow: /
Crawl-delay: 1.5

Host: example.com
Sitemap: https://example.com/sitemap_index.xml
";
    let parser = bound(content);
    assert!(!parser.is_allowed("somebot", "/cgi-bin/run"));
    assert!(!parser.is_allowed("somebot", "/tmp/file"));
    assert!(parser.is_allowed("somebot", "/about"));
    assert!(parser.is_allowed("googlebot", "/cgi-bin/run"));
    assert_eq!(parser.crawl_delay("Googlebot"), Some(1.5));
    assert_eq!(parser.crawl_delay("somebot"), None);
    assert_eq!(parser.sitemaps().len(), 1);
}

#[test]
fn test_hash_in_rule_does_not_widen_it() {
    let parser = bound("User-agent: *\nDisallow: /#!/secret\nSitemap: https://example.com/s.xml#v2");
    assert!(parser.is_allowed("bot", "/public"));
    assert_eq!(parser.rules().wildcard().unwrap().disallows().collect::<Vec<_>>(), vec!["/#!/secret"]);
    assert_eq!(parser.sitemaps(), vec!["https://example.com/s.xml#v2".to_string()]);
}

#[test]
fn test_snapshot_shared_across_threads() {
    let parser = bound("User-agent: *\nDisallow: /private");
    let snapshot = parser.snapshot().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let robots = std::sync::Arc::clone(&snapshot);
            std::thread::spawn(move || robots.is_allowed("bot", &format!("/private/{}", i)))
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap());
    }
}

#[test]
fn test_free_function_normalizes_path() {
    let parsed = ParsedRobots::from_content("User-agent: *\nDisallow: /admin");
    assert!(!robots::is_allowed(&parsed, "bot", "admin/panel"));
    assert!(robots::is_allowed(&parsed, "bot", ""));
}
