use crate::UrlError;
use url::Url;

/// Normalizes a bind target into an absolute site URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Prefix `http://` when no scheme is present
/// 3. Parse; require an http/https scheme and a host
/// 4. Remove trailing slashes from the path
///
/// # Arguments
///
/// * `target` - The site URL or bare domain to bind to
///
/// # Returns
///
/// * `Ok(Url)` - Normalized URL
/// * `Err(UrlError)` - The target is empty or not a usable http(s) URL
///
/// # Examples
///
/// ```
/// use robotxt::url::normalize_target;
///
/// let url = normalize_target("example.com/").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/");
/// ```
pub fn normalize_target(target: &str) -> Result<Url, UrlError> {
    let trimmed = target.trim();
    if trimmed.trim_matches('/').is_empty() {
        return Err(UrlError::Empty);
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingDomain);
    }

    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);

    Ok(url)
}

/// Builds the robots.txt location for a site
///
/// robots.txt always lives at the root of the origin, whatever path the
/// target carries.
///
/// # Examples
///
/// ```
/// use robotxt::url::{normalize_target, robots_url};
///
/// let target = normalize_target("https://example.com:8080/blog/post").unwrap();
/// assert_eq!(robots_url(&target).as_str(), "https://example.com:8080/robots.txt");
/// ```
pub fn robots_url(target: &Url) -> Url {
    let mut url = target.clone();
    url.set_path("/robots.txt");
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Normalizes a request path before matching
///
/// * Full URLs are reduced to their path and query
/// * An empty path becomes `/`
/// * A missing leading `/` is added
/// * Bare paths are percent-encoded and lose their fragment, as a full
///   URL's path would
///
/// # Examples
///
/// ```
/// use robotxt::url::normalize_request_path;
///
/// assert_eq!(normalize_request_path(""), "/");
/// assert_eq!(normalize_request_path("page.html"), "/page.html");
/// assert_eq!(normalize_request_path("https://a.com/x?y=1#top"), "/x?y=1");
/// ```
pub fn normalize_request_path(path: &str) -> String {
    let trimmed = path.trim();

    if trimmed.contains("://") {
        if let Ok(url) = Url::parse(trimmed) {
            return path_and_query(&url);
        }
    }

    let relative = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    // Bare paths go through the same URL parser so both forms are encoded alike
    match Url::parse(&format!("{}{}", PATH_BASE, relative)) {
        Ok(url) => path_and_query(&url),
        Err(_) => relative,
    }
}

/// Host used only to run bare request paths through the URL parser
const PATH_BASE: &str = "http://localhost";

fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
