//! Product-Scout: a breadth-first product page discoverer
//!
//! This crate crawls a set of web domains outward from each domain's root,
//! classifies every same-domain link it finds, and records the ones that look
//! like product pages, grouped by domain.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Product-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::TraversalState,
        to: state::TraversalState,
    },

    #[error("Admission controller closed")]
    AdmissionClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid product marker: {0}")]
    InvalidMarker(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed domain: {0}")]
    Malformed(String),
}

/// Result type alias for Product-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, CrawlOutcome};
pub use state::{DomainState, TraversalState};
pub use storage::{ProductIndex, ProductUrls};
pub use url::{is_product_url, resolve, same_host, ProductMatcher};
