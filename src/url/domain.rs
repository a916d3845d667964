use crate::{UrlError, UrlResult};
use url::Url;

/// Characters that cannot appear in a bare `host[:port]` domain entry
const FORBIDDEN_DOMAIN_CHARS: &[char] = &['/', '?', '#', '@', '\\'];

/// Builds the root URL a domain traversal starts from
///
/// The domain is a bare hostname, optionally with a port. The result is
/// `{scheme}://{domain}`, which the URL parser renders with a trailing `/`.
///
/// # Examples
///
/// ```
/// use product_scout::url::root_url;
///
/// let root = root_url("www.example.com", "https").unwrap();
/// assert_eq!(root.as_str(), "https://www.example.com/");
///
/// assert!(root_url("example.com/shop", "https").is_err());
/// ```
pub fn root_url(domain: &str, scheme: &str) -> UrlResult<Url> {
    if domain.is_empty() {
        return Err(UrlError::Malformed("domain cannot be empty".to_string()));
    }

    if domain.contains(FORBIDDEN_DOMAIN_CHARS) || domain.chars().any(char::is_whitespace) {
        return Err(UrlError::Malformed(format!(
            "'{}' is not a bare host name",
            domain
        )));
    }

    if scheme != "http" && scheme != "https" {
        return Err(UrlError::InvalidScheme(scheme.to_string()));
    }

    let url = Url::parse(&format!("{}://{}", scheme, domain))
        .map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Returns the host component of a URL used for same-domain comparison
///
/// The component is the lowercase host plus an explicit non-default port,
/// so `127.0.0.1:8080` and `127.0.0.1:9090` are different domains.
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_url_simple_domain() {
        let url = root_url("example.com", "https").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_root_url_with_port() {
        let url = root_url("127.0.0.1:8080", "http").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_root_url_lowercases_host() {
        let url = root_url("WWW.Example.COM", "https").unwrap();
        assert_eq!(url.host_str(), Some("www.example.com"));
    }

    #[test]
    fn test_root_url_rejects_paths_and_schemes() {
        assert!(root_url("example.com/shop", "https").is_err());
        assert!(root_url("https://example.com", "https").is_err());
        assert!(root_url("user@example.com", "https").is_err());
        assert!(root_url("exa mple.com", "https").is_err());
        assert!(root_url("", "https").is_err());
    }

    #[test]
    fn test_root_url_rejects_unknown_scheme() {
        assert!(matches!(
            root_url("example.com", "ftp"),
            Err(UrlError::InvalidScheme(_))
        ));
    }

    #[test]
    fn test_host_key_without_port() {
        let url = Url::parse("https://Example.COM/path").unwrap();
        assert_eq!(host_key(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_host_key_with_port() {
        let url = Url::parse("http://127.0.0.1:9090/").unwrap();
        assert_eq!(host_key(&url), Some("127.0.0.1:9090".to_string()));
    }

    #[test]
    fn test_host_key_drops_default_port() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(host_key(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_host_key_missing_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(host_key(&url), None);
    }
}
