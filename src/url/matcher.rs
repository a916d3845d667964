use crate::config::DEFAULT_PRODUCT_MARKERS;
use crate::ConfigError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static DEFAULT_MATCHER: LazyLock<ProductMatcher> = LazyLock::new(|| {
    ProductMatcher::new(DEFAULT_PRODUCT_MARKERS).expect("default product markers are valid")
});

/// Classifies URLs as product pages by path markers
///
/// A URL is a product page when its path contains any configured marker,
/// for example `/product/` or `/dp/`. The markers are compiled once into a
/// single alternation and shared by every traversal.
#[derive(Debug, Clone)]
pub struct ProductMatcher {
    pattern: Regex,
    markers: Vec<String>,
}

impl ProductMatcher {
    /// Compiles a matcher from literal path markers
    ///
    /// # Returns
    ///
    /// * `Ok(ProductMatcher)` - The compiled matcher
    /// * `Err(ConfigError)` - No markers were given or the pattern did not compile
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self, ConfigError> {
        let markers: Vec<String> = markers
            .iter()
            .map(|m| m.as_ref().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        if markers.is_empty() {
            return Err(ConfigError::InvalidMarker(
                "at least one product marker is required".to_string(),
            ));
        }

        let alternation = markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");

        let pattern =
            Regex::new(&alternation).map_err(|e| ConfigError::InvalidMarker(e.to_string()))?;

        Ok(Self { pattern, markers })
    }

    /// Returns true if the URL's path contains a product marker
    pub fn is_product(&self, url: &Url) -> bool {
        self.pattern.is_match(url.path())
    }

    /// Returns the markers this matcher was built from
    pub fn markers(&self) -> &[String] {
        &self.markers
    }
}

impl Default for ProductMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}

/// Checks a URL string against the default product markers
///
/// Returns false for strings that do not parse as absolute URLs.
///
/// # Examples
///
/// ```
/// use product_scout::url::is_product_url;
///
/// assert!(is_product_url("https://x.com/product/123"));
/// assert!(is_product_url("https://x.com/dp/ABC"));
/// assert!(!is_product_url("https://x.com/about"));
/// ```
pub fn is_product_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(url) => DEFAULT_MATCHER.is_product(&url),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers_match() {
        assert!(is_product_url("https://x.com/product/123"));
        assert!(is_product_url("https://x.com/item/9"));
        assert!(is_product_url("https://x.com/p/5"));
        assert!(is_product_url("https://x.com/dp/ABC"));
    }

    #[test]
    fn test_non_product_pages() {
        assert!(!is_product_url("https://x.com/about"));
        assert!(!is_product_url("https://x.com/category/shoes"));
        assert!(!is_product_url("https://x.com/"));
    }

    #[test]
    fn test_marker_must_be_a_path_segment() {
        assert!(!is_product_url("https://x.com/products"));
        assert!(!is_product_url("https://x.com/shop/p"));
        assert!(!is_product_url("https://x.com/dpx/ABC"));
    }

    #[test]
    fn test_marker_nested_in_path() {
        assert!(is_product_url("https://x.com/en-us/shop/item/42?color=red"));
    }

    #[test]
    fn test_only_path_is_inspected() {
        assert!(!is_product_url("https://x.com/search?next=/product/1"));
        assert!(!is_product_url("https://x.com/about#/item/2"));
    }

    #[test]
    fn test_unparseable_url() {
        assert!(!is_product_url("/product/123"));
        assert!(!is_product_url(""));
    }

    #[test]
    fn test_custom_markers() {
        let matcher = ProductMatcher::new(&["/sku/", "/goods.php"]).unwrap();
        let sku = Url::parse("https://shop.example/sku/77").unwrap();
        let legacy = Url::parse("https://shop.example/goods.php?id=3").unwrap();
        let product = Url::parse("https://shop.example/product/1").unwrap();

        assert!(matcher.is_product(&sku));
        assert!(matcher.is_product(&legacy));
        assert!(!matcher.is_product(&product));
    }

    #[test]
    fn test_markers_are_literal() {
        let matcher = ProductMatcher::new(&["/a.b/"]).unwrap();
        let dotted = Url::parse("https://x.com/a.b/1").unwrap();
        let other = Url::parse("https://x.com/aXb/1").unwrap();

        assert!(matcher.is_product(&dotted));
        assert!(!matcher.is_product(&other));
    }

    #[test]
    fn test_empty_markers_rejected() {
        let empty: [&str; 0] = [];
        assert!(ProductMatcher::new(&empty).is_err());
        assert!(ProductMatcher::new(&[""]).is_err());
    }

    #[test]
    fn test_default_matcher_markers() {
        assert_eq!(ProductMatcher::default().markers().len(), 4);
    }
}
