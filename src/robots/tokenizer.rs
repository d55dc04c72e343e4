//! Directive tokenizer
//!
//! Splits raw robots.txt text into an ordered sequence of `(keyword, value)`
//! directives. Parsing is best-effort: comment lines, blank lines, lines
//! without a `:` separator and lines with an empty keyword are skipped
//! without raising an error.

/// The closed set of directive keywords this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    UserAgent,
    Allow,
    Disallow,
    CrawlDelay,
    Sitemap,
    /// Any other keyword (`host`, `noindex`, typos...). Ignored downstream.
    Other,
}

impl DirectiveKind {
    /// Maps a lower-cased, trimmed keyword to its kind
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "user-agent" => Self::UserAgent,
            "allow" => Self::Allow,
            "disallow" => Self::Disallow,
            "crawl-delay" => Self::CrawlDelay,
            "sitemap" => Self::Sitemap,
            _ => Self::Other,
        }
    }
}

/// A single parsed line of robots.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Normalized keyword kind
    pub kind: DirectiveKind,
    /// Lower-cased keyword as written (useful for `Other` directives)
    pub keyword: String,
    /// Trimmed value, internal characters (including `#`) kept
    pub value: String,
    /// 1-based line number in the source text
    pub line: usize,
}

/// Tokenizes raw robots.txt text into directives
///
/// # Arguments
///
/// * `content` - The raw robots.txt text
///
/// # Returns
///
/// Directives in source order. Malformed lines are dropped.
///
/// # Examples
///
/// ```
/// use robotxt::robots::{tokenize, DirectiveKind};
///
/// let directives = tokenize("# comment\nUser-agent: *\nDisallow: /tmp/");
/// assert_eq!(directives.len(), 2);
/// assert_eq!(directives[0].kind, DirectiveKind::UserAgent);
/// assert_eq!(directives[1].value, "/tmp/");
/// ```
pub fn tokenize(content: &str) -> Vec<Directive> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    // CRLF, LF and a lone CR all end a line
    content
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .enumerate()
        .filter_map(|(index, line)| parse_line(line, index + 1))
        .collect()
}

/// Parses one line, returning `None` for comments and malformed input
fn parse_line(line: &str, line_number: usize) -> Option<Directive> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (keyword, value) = trimmed.split_once(':')?;
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return None;
    }

    Some(Directive {
        kind: DirectiveKind::from_keyword(&keyword),
        keyword,
        value: value.trim().to_string(),
        line: line_number,
    })
}
