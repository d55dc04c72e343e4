//! Rule-group builder
//!
//! Folds a directive stream into per-user-agent rule groups. Every
//! `User-agent` line opens a fresh block attributed to its token; blocks that
//! share a token (case-insensitively) are merged so that rules accumulate.

use crate::robots::tokenizer::{Directive, DirectiveKind};
use std::collections::HashMap;

/// The wildcard user-agent token
pub const WILDCARD_AGENT: &str = "*";

/// Whether a rule grants or denies access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Allow,
    Disallow,
}

/// A single Allow or Disallow rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    /// Path pattern as declared, surrounding whitespace removed
    pub pattern: String,
}

impl Rule {
    pub fn allow(pattern: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Allow,
            pattern: pattern.into(),
        }
    }

    pub fn disallow(pattern: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Disallow,
            pattern: pattern.into(),
        }
    }

    /// Specificity of the rule: its length in characters
    pub fn specificity(&self) -> usize {
        self.pattern.chars().count()
    }
}

/// Rules attributed to one user-agent token
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleGroup {
    /// Lower-cased user-agent token
    pub user_agent: String,
    /// Allow and Disallow rules in declaration order
    pub rules: Vec<Rule>,
    /// Crawl delay in seconds, if a valid one was declared
    pub crawl_delay: Option<f64>,
}

impl RuleGroup {
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_lowercase(),
            ..Default::default()
        }
    }

    /// Allow patterns in declaration order
    pub fn allows(&self) -> impl Iterator<Item = &str> {
        self.patterns(RuleKind::Allow)
    }

    /// Disallow patterns in declaration order
    pub fn disallows(&self) -> impl Iterator<Item = &str> {
        self.patterns(RuleKind::Disallow)
    }

    fn patterns(&self, kind: RuleKind) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(move |rule| rule.kind == kind)
            .map(|rule| rule.pattern.as_str())
    }

    pub fn is_wildcard(&self) -> bool {
        self.user_agent == WILDCARD_AGENT
    }

    /// Appends another block's rules and takes its crawl-delay if it has one
    fn merge(&mut self, other: RuleGroup) {
        self.rules.extend(other.rules);
        if other.crawl_delay.is_some() {
            self.crawl_delay = other.crawl_delay;
        }
    }
}

/// All rule groups of one robots.txt document
///
/// Immutable once built. Groups keep the order in which their token was
/// first declared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    groups: Vec<RuleGroup>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    /// Builds a rule set from tokenized directives
    ///
    /// # Arguments
    ///
    /// * `directives` - Directives in source order
    ///
    /// # Returns
    ///
    /// The merged rule set. Directives that appear before any `User-agent`
    /// line are dropped.
    pub fn from_directives(directives: &[Directive]) -> Self {
        let mut set = RuleSet::default();
        let mut current: Option<RuleGroup> = None;

        for directive in directives {
            match directive.kind {
                DirectiveKind::UserAgent => {
                    if let Some(block) = current.take() {
                        set.insert(block);
                    }
                    if directive.value.is_empty() {
                        tracing::debug!(
                            "Ignoring empty User-agent on line {}",
                            directive.line
                        );
                    } else {
                        current = Some(RuleGroup::new(&directive.value));
                    }
                }
                DirectiveKind::Allow => {
                    if let Some(block) = current.as_mut() {
                        block.rules.push(Rule::allow(&directive.value));
                    }
                }
                DirectiveKind::Disallow => {
                    if let Some(block) = current.as_mut() {
                        block.rules.push(Rule::disallow(&directive.value));
                    }
                }
                DirectiveKind::CrawlDelay => {
                    if let Some(block) = current.as_mut() {
                        match parse_crawl_delay(&directive.value) {
                            Some(delay) => block.crawl_delay = Some(delay),
                            None => tracing::debug!(
                                "Ignoring invalid Crawl-delay '{}' on line {}",
                                directive.value,
                                directive.line
                            ),
                        }
                    }
                }
                DirectiveKind::Sitemap | DirectiveKind::Other => {}
            }
        }

        if let Some(block) = current.take() {
            set.insert(block);
        }

        set
    }

    /// Adds a block, merging it into an existing group with the same token
    fn insert(&mut self, block: RuleGroup) {
        match self.index.get(&block.user_agent) {
            Some(&position) => self.groups[position].merge(block),
            None => {
                self.index.insert(block.user_agent.clone(), self.groups.len());
                self.groups.push(block);
            }
        }
    }

    /// Returns the group declared for exactly this token (case-insensitive)
    pub fn group(&self, user_agent: &str) -> Option<&RuleGroup> {
        let key = user_agent.trim().to_lowercase();
        self.index.get(&key).map(|&position| &self.groups[position])
    }

    /// Returns the `*` group, if declared
    pub fn wildcard(&self) -> Option<&RuleGroup> {
        self.group(WILDCARD_AGENT)
    }

    /// Selects the group that applies to a user-agent
    ///
    /// Exact token match first, then the wildcard group.
    pub fn select(&self, user_agent: &str) -> Option<&RuleGroup> {
        self.group(user_agent).or_else(|| self.wildcard())
    }

    /// All groups in first-declaration order
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Parses a crawl-delay value as a non-negative, finite number of seconds
pub fn parse_crawl_delay(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|delay| delay.is_finite() && *delay >= 0.0)
}
