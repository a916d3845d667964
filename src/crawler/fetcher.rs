//! HTTP fetcher implementation
//!
//! This module handles the single-page fetch the traversal depends on:
//! - The `PageFetcher` seam the traversal calls through
//! - Building the HTTP client with user agent and timeout
//! - Classifying responses into success, HTTP error, and network error
//!
//! Failed fetches are reported to the caller and never retried.

use crate::config::UserAgentConfig;
use crate::ScoutError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, DNS failure, body read error, etc.)
    NetworkError {
        /// Error description
        error: String,
        /// Whether the request hit the fetch timeout
        timed_out: bool,
    },
}

impl FetchResult {
    /// Converts the result into the page body or a typed error for `url`
    pub fn into_body(self, url: &Url) -> Result<String, ScoutError> {
        match self {
            Self::Success {
                final_url,
                status_code,
                body,
            } => {
                if final_url != url.as_str() {
                    tracing::debug!("{} redirected to {} (HTTP {})", url, final_url, status_code);
                }
                Ok(body)
            }
            Self::HttpError { status_code } => Err(ScoutError::HttpStatus {
                url: url.to_string(),
                status: status_code,
            }),
            Self::NetworkError {
                timed_out: true, ..
            } => Err(ScoutError::Timeout {
                url: url.to_string(),
            }),
            Self::NetworkError { error, .. } => Err(ScoutError::Fetch {
                url: url.to_string(),
                message: error,
            }),
        }
    }
}

/// Capability to retrieve the raw HTML of one page
///
/// The traversal only depends on this trait, so tests can substitute an
/// in-memory site for real HTTP.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a page; failures are reported in the result, never retried
    async fn fetch(&self, url: &Url) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Upper bound on a single request, including the body read
///
/// # Example
///
/// ```no_run
/// use product_scout::config::UserAgentConfig;
/// use product_scout::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(&UserAgentConfig::default(), Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `PageFetcher` backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(config: &UserAgentConfig, timeout: Duration) -> Result<Self, ScoutError> {
        Ok(Self {
            client: build_http_client(config, timeout)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        fetch_url(&self.client, url.as_str()).await
    }
}

/// Fetches a URL and classifies the outcome
///
/// # Outcomes
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx, body read | Success |
/// | Any other status | HttpError |
/// | Timeout | NetworkError (timed_out) |
/// | Connection refused, DNS, TLS | NetworkError |
/// | Body read failure | NetworkError |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(e),
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    if e.is_timeout() {
        FetchResult::NetworkError {
            error: "Request timeout".to_string(),
            timed_out: true,
        }
    } else if e.is_connect() {
        FetchResult::NetworkError {
            error: format!("Connection failed: {}", e),
            timed_out: false,
        }
    } else if let Some(status) = e.status() {
        FetchResult::HttpError {
            status_code: status.as_u16(),
        }
    } else {
        FetchResult::NetworkError {
            error: e.to_string(),
            timed_out: false,
        }
    }
}
