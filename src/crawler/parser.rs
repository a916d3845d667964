//! Link extraction from fetched HTML
//!
//! Every `<a href>` in the document is resolved against the base URL and kept
//! only when it stays on the base URL's host. No deduplication happens here;
//! the traversal's visited set takes care of that.

use crate::url::{hosts_match, resolve_href};
use crate::ScoutError;
use scraper::{Html, Selector};
use url::Url;

/// Extracts same-host links from an HTML document, in document order
///
/// Hrefs that fail to resolve, and links to any other host (including
/// host-less schemes like `mailto:`), are skipped silently.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `base_url` - The URL hrefs are resolved against and whose host links must share
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - Absolute same-host links
/// * `Err(ScoutError)` - The document could not be queried; callers treat this
///   as a page with no links
///
/// # Example
///
/// ```
/// use product_scout::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/product/1">A</a><a href="https://other.com/">B</a>"#;
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base).unwrap();
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/product/1");
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Result<Vec<Url>, ScoutError> {
    let anchor_selector = Selector::parse("a[href]").map_err(|e| ScoutError::HtmlParse {
        url: base_url.to_string(),
        message: format!("{:?}", e),
    })?;

    let document = Html::parse_document(html);

    let links = document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(base_url, href.trim()).ok())
        .filter(|link| hosts_match(base_url, link))
        .collect();

    Ok(links)
}
