use serde::Deserialize;
use std::time::Duration;

/// Default path markers that identify a product page
pub const DEFAULT_PRODUCT_MARKERS: &[&str] = &["/product/", "/item/", "/p/", "/dp/"];

/// Main configuration structure for Product-Scout
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bare hostnames (optionally `host:port`) to crawl from their root
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Politeness delay held after each processed page (milliseconds)
    #[serde(rename = "rate-limit-ms")]
    pub rate_limit_ms: u64,

    /// Maximum number of fetches in flight across all domains
    pub concurrency: u32,

    /// Timeout for a single page fetch (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Scheme used to build each domain's root URL
    pub scheme: String,
}

impl CrawlerConfig {
    /// Returns the politeness delay as a `Duration`
    pub fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.rate_limit_ms)
    }

    /// Returns the per-fetch timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            rate_limit_ms: 10,
            concurrency: 50,
            request_timeout_secs: 10,
            scheme: "https".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "ProductScout".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// Product classification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path fragments whose presence marks a URL as a product page
    pub markers: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_PRODUCT_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON results file
    #[serde(rename = "results-path")]
    pub results_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: "product_urls.json".to_string(),
        }
    }
}
