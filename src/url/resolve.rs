use crate::url::domain::host_key;
use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves an href against a base URL into an absolute URL
///
/// Uses standard URL reference resolution; query and fragment of the href are
/// kept as written. Returns `None` when either input
/// fails to parse; a bad link is a "no link" outcome, never an error for the
/// caller to handle.
///
/// # Examples
///
/// ```
/// use product_scout::url::resolve;
///
/// let url = resolve("https://example.com/shop/", "../item/9").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/item/9");
///
/// assert!(resolve("not a url", "/page").is_none());
/// ```
pub fn resolve(base: &str, href: &str) -> Option<Url> {
    let base = Url::parse(base).ok()?;
    resolve_href(&base, href).ok()
}

/// Resolves an href against an already parsed base URL
///
/// # Returns
///
/// * `Ok(Url)` - The absolute URL
/// * `Err(UrlError)` - The href could not be resolved
pub fn resolve_href(base: &Url, href: &str) -> UrlResult<Url> {
    base.join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))
}

/// Returns true if both URLs parse and share the same host component
///
/// # Examples
///
/// ```
/// use product_scout::url::same_host;
///
/// assert!(same_host("https://example.com/", "https://example.com/about"));
/// assert!(!same_host("https://example.com/", "https://cdn.example.com/a.js"));
/// assert!(!same_host("https://example.com/", "::not a url::"));
/// ```
pub fn same_host(base: &str, candidate: &str) -> bool {
    match (Url::parse(base), Url::parse(candidate)) {
        (Ok(base), Ok(candidate)) => hosts_match(&base, &candidate),
        _ => false,
    }
}

/// Compares the host components of two parsed URLs
///
/// URLs without a host (`mailto:`, `javascript:`, `data:`) never match.
pub fn hosts_match(base: &Url, candidate: &Url) -> bool {
    match (host_key(base), host_key(candidate)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
