//! Crawler module for product page discovery
//!
//! This module contains the crawl engine, including:
//! - HTTP fetching behind the `PageFetcher` seam
//! - HTML parsing and same-host link extraction
//! - Global admission control over in-flight fetches
//! - Per-domain breadth-first traversal
//! - Overall crawl coordination across domains

mod admission;
mod coordinator;
mod fetcher;
mod parser;
mod traversal;

pub use admission::{AdmissionController, AdmissionToken};
pub use coordinator::{run_crawl, Coordinator, CrawlOutcome};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::extract_links;
pub use traversal::{CrawlContext, DomainTraversal};

use crate::config::Config;
use crate::ScoutError;

/// Runs a complete crawl operation from a loaded configuration
///
/// This is the main entry point for the binary. It will:
/// 1. Build the HTTP fetcher and product matcher
/// 2. Launch one traversal per configured domain
/// 3. Wait for every traversal to finish
///
/// # Arguments
///
/// * `config` - The validated configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Product URLs and per-domain counters
/// * `Err(ScoutError)` - The crawl could not be set up
pub async fn crawl(config: &Config) -> Result<CrawlOutcome, ScoutError> {
    let coordinator = Coordinator::from_config(config)?;
    Ok(coordinator.run(&config.domains).await)
}
