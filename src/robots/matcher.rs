//! Path matching and precedence
//!
//! Decides allow/disallow for a request path against one rule group.
//!
//! # Pattern semantics
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `/dir/` | any path starting with `/dir/` |
//! | `/` | every path |
//! | `/a*b` | `*` stands for any run of characters, prefix-anchored |
//! | `/page$` | exactly `/page` |
//! | `/*.php$` | any path ending in `.php` |
//! | empty | nothing |
//!
//! # Precedence
//!
//! Every matching rule is collected; the longest pattern wins. When several
//! rules share the maximum length the path is allowed. No match at all means
//! allowed.

use crate::robots::groups::{Rule, RuleGroup, RuleKind};
use std::fmt;

/// Final access decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allowed,
    Disallowed,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => write!(f, "allowed"),
            Self::Disallowed => write!(f, "disallowed"),
        }
    }
}

/// Why a decision was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    /// No robots.txt is bound or it could not be retrieved
    NoDocument,
    /// Neither the user-agent nor `*` has a group
    NoApplicableGroup,
    /// The group has no rule matching the path
    NoMatchingRule,
    /// A single rule had the greatest specificity
    LongestMatch(Rule),
    /// Several rules shared the greatest specificity
    Tie(Vec<Rule>),
}

/// Outcome of a single access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub decision: Decision,
    pub reason: MatchReason,
    /// User-agent as queried
    pub user_agent: String,
    /// Path as evaluated
    pub path: String,
    /// Token of the group that applied, if any
    pub group: Option<String>,
}

impl MatchResult {
    /// Builds a permissive result that involved no rule group
    pub fn unrestricted(user_agent: &str, path: &str, reason: MatchReason) -> Self {
        Self {
            decision: Decision::Allowed,
            reason,
            user_agent: user_agent.to_string(),
            path: path.to_string(),
            group: None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed()
    }

    /// The single winning rule, when there was one
    pub fn winning_rule(&self) -> Option<&Rule> {
        match &self.reason {
            MatchReason::LongestMatch(rule) => Some(rule),
            _ => None,
        }
    }
}

/// Evaluates a path against a rule group
///
/// # Arguments
///
/// * `group` - The rule group selected for the user-agent
/// * `user_agent` - The user-agent being checked, recorded in the result
/// * `path` - The normalized request path
///
/// # Returns
///
/// The decision together with the rule(s) that produced it
pub fn match_group(group: &RuleGroup, user_agent: &str, path: &str) -> MatchResult {
    let matches: Vec<&Rule> = group
        .rules
        .iter()
        .filter(|rule| pattern_matches(&rule.pattern, path))
        .collect();

    let (decision, reason) = resolve(&matches);

    MatchResult {
        decision,
        reason,
        user_agent: user_agent.to_string(),
        path: path.to_string(),
        group: Some(group.user_agent.clone()),
    }
}

/// Picks the winner among matching rules
fn resolve(matches: &[&Rule]) -> (Decision, MatchReason) {
    let Some(longest) = matches.iter().map(|rule| rule.specificity()).max() else {
        return (Decision::Allowed, MatchReason::NoMatchingRule);
    };

    let mut winners: Vec<Rule> = matches
        .iter()
        .filter(|rule| rule.specificity() == longest)
        .map(|rule| (*rule).clone())
        .collect();

    if winners.len() > 1 {
        return (Decision::Allowed, MatchReason::Tie(winners));
    }

    // Exactly one winner at this point
    let winner = winners.remove(0);
    let decision = match winner.kind {
        RuleKind::Allow => Decision::Allowed,
        RuleKind::Disallow => Decision::Disallowed,
    };
    (decision, MatchReason::LongestMatch(winner))
}

/// Tests a single robots.txt pattern against a path
///
/// `*` matches any run of characters and a trailing `$` anchors the pattern
/// at the end of the path. Without `$`, matching a prefix of the path is
/// enough. Empty patterns never match.
///
/// # Examples
///
/// ```
/// use robotxt::robots::pattern_matches;
///
/// assert!(pattern_matches("/private/", "/private/data.html"));
/// assert!(pattern_matches("/*.php$", "/index.php"));
/// assert!(!pattern_matches("/*.php$", "/index.php?x=1"));
/// assert!(!pattern_matches("/page$", "/page2"));
/// ```
pub fn pattern_matches(pattern: &str, path: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }

    let (body, anchored) = match pattern.strip_suffix('$') {
        Some(body) => (body, true),
        None => (pattern, false),
    };

    let pattern: Vec<char> = body.chars().collect();
    let path: Vec<char> = path.chars().collect();

    let mut p = 0;
    let mut s = 0;
    // Position of the last `*` seen and the path position it was tried at
    let mut backtrack: Option<(usize, usize)> = None;

    loop {
        if p == pattern.len() && (!anchored || s == path.len()) {
            return true;
        }

        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, s));
            p += 1;
            continue;
        }

        if p < pattern.len() && s < path.len() && pattern[p] == path[s] {
            p += 1;
            s += 1;
            continue;
        }

        // Mismatch: let the last `*` swallow one more character
        match backtrack {
            Some((star, tried)) if tried < path.len() => {
                backtrack = Some((star, tried + 1));
                p = star + 1;
                s = tried + 1;
            }
            _ => return false,
        }
    }
}
