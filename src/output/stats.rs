//! Crawl statistics
//!
//! This module turns a finished crawl outcome into summary statistics and
//! prints them.

use crate::crawler::CrawlOutcome;
use crate::state::DomainSummary;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// Number of domains crawled
    pub domains: usize,

    /// Distinct pages dequeued across all domains
    pub pages_visited: u64,

    /// Pages fetched successfully
    pub pages_fetched: u64,

    /// Pages whose fetch failed
    pub fetch_failures: u64,

    /// Pages whose link extraction failed
    pub parse_failures: u64,

    /// Product URLs recorded
    pub product_urls: u64,

    /// Domains that ended without a single successful fetch
    pub unreachable_domains: Vec<String>,

    /// Highest number of fetches in flight at once
    pub peak_in_flight: usize,

    /// Wall-clock duration of the run in seconds
    pub duration_seconds: i64,

    /// Per-domain counters
    pub per_domain: Vec<DomainSummary>,
}

/// Computes statistics from a finished crawl
pub fn compute_statistics(outcome: &CrawlOutcome) -> CrawlStatistics {
    let summaries = &outcome.summaries;

    CrawlStatistics {
        domains: summaries.len(),
        pages_visited: summaries.iter().map(|s| s.pages_visited).sum(),
        pages_fetched: summaries.iter().map(|s| s.pages_fetched).sum(),
        fetch_failures: summaries.iter().map(|s| s.fetch_failures).sum(),
        parse_failures: summaries.iter().map(|s| s.parse_failures).sum(),
        product_urls: summaries.iter().map(|s| s.products_found).sum(),
        unreachable_domains: summaries
            .iter()
            .filter(|s| s.pages_fetched == 0)
            .map(|s| s.domain.clone())
            .collect(),
        peak_in_flight: outcome.peak_in_flight,
        duration_seconds: outcome.duration().num_seconds(),
        per_domain: summaries.clone(),
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Domains crawled: {}", stats.domains);
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Pages fetched: {}", stats.pages_fetched);
    println!("  Fetch failures: {}", stats.fetch_failures);
    println!("  Parse failures: {}", stats.parse_failures);
    println!("  Product URLs: {}", stats.product_urls);
    println!("  Peak fetches in flight: {}", stats.peak_in_flight);
    println!("  Duration: {}s", stats.duration_seconds);
    println!();

    println!("Per Domain:");
    // Most productive domains first
    let mut domains: Vec<_> = stats.per_domain.iter().collect();
    domains.sort_by(|a, b| b.products_found.cmp(&a.products_found));

    for summary in domains {
        println!(
            "  {}: {} products, {} pages fetched, {} failed",
            summary.domain,
            summary.products_found,
            summary.pages_fetched,
            summary.fetch_failures + summary.parse_failures
        );
    }

    if !stats.unreachable_domains.is_empty() {
        println!();
        println!("Unreachable Domains ({}):", stats.unreachable_domains.len());
        for domain in &stats.unreachable_domains {
            println!("  - {}", domain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TraversalState;
    use crate::storage::ProductUrls;
    use chrono::{Duration, Utc};

    fn summary(domain: &str, fetched: u64, failed: u64, products: u64) -> DomainSummary {
        DomainSummary {
            domain: domain.to_string(),
            state: TraversalState::Done,
            pages_visited: fetched + failed,
            pages_fetched: fetched,
            fetch_failures: failed,
            parse_failures: 0,
            products_found: products,
            skipped_visited: 0,
        }
    }

    fn outcome() -> CrawlOutcome {
        let started_at = Utc::now();
        CrawlOutcome {
            products: ProductUrls::new(),
            summaries: vec![
                summary("a.com", 10, 2, 7),
                summary("b.com", 0, 1, 0),
                summary("c.com", 4, 0, 3),
            ],
            peak_in_flight: 3,
            started_at,
            finished_at: started_at + Duration::seconds(42),
        }
    }

    #[test]
    fn test_compute_totals() {
        let stats = compute_statistics(&outcome());

        assert_eq!(stats.domains, 3);
        assert_eq!(stats.pages_visited, 17);
        assert_eq!(stats.pages_fetched, 14);
        assert_eq!(stats.fetch_failures, 3);
        assert_eq!(stats.product_urls, 10);
        assert_eq!(stats.peak_in_flight, 3);
        assert_eq!(stats.duration_seconds, 42);
    }

    #[test]
    fn test_unreachable_domains() {
        let stats = compute_statistics(&outcome());
        assert_eq!(stats.unreachable_domains, vec!["b.com"]);
    }

    #[test]
    fn test_empty_outcome() {
        let started_at = Utc::now();
        let empty = CrawlOutcome {
            products: ProductUrls::new(),
            summaries: vec![],
            peak_in_flight: 0,
            started_at,
            finished_at: started_at,
        };

        let stats = compute_statistics(&empty);
        assert_eq!(stats.domains, 0);
        assert_eq!(stats.product_urls, 0);
        assert!(stats.unreachable_domains.is_empty());
    }
}
