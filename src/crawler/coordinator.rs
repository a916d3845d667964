//! Crawler coordinator - main crawl orchestration logic
//!
//! This module launches one traversal task per domain, all sharing one
//! admission controller and one product index, and waits for every task to
//! finish before handing back the results.

use crate::config::{validate_crawler_config, Config, CrawlerConfig, UserAgentConfig};
use crate::crawler::admission::AdmissionController;
use crate::crawler::fetcher::{HttpFetcher, PageFetcher};
use crate::crawler::traversal::{CrawlContext, DomainTraversal};
use crate::state::DomainSummary;
use crate::storage::{ProductIndex, ProductUrls};
use crate::url::{root_url, ProductMatcher};
use crate::{ConfigError, ScoutError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Everything a finished crawl run produced
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Product URLs per domain, one entry per crawled domain
    pub products: ProductUrls,

    /// Per-domain counters, in the order the domains were given
    pub summaries: Vec<DomainSummary>,

    /// Highest number of admission tokens held at once
    pub peak_in_flight: usize,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the last traversal finished
    pub finished_at: DateTime<Utc>,
}

impl CrawlOutcome {
    /// Wall-clock duration of the run
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    scheme: String,
    rate_limit: Duration,
    concurrency: usize,
    fetcher: Arc<dyn PageFetcher>,
    matcher: Arc<ProductMatcher>,
}

impl Coordinator {
    /// Creates a new coordinator from the `[crawler]` config section
    ///
    /// # Arguments
    ///
    /// * `crawler` - Rate limit, concurrency, timeout and root URL scheme
    /// * `matcher` - Product classifier shared by every traversal
    /// * `fetcher` - Fetch capability shared by every traversal
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(ScoutError)` - The crawler settings are invalid (e.g. zero concurrency)
    pub fn new(
        crawler: CrawlerConfig,
        matcher: ProductMatcher,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, ScoutError> {
        validate_crawler_config(&crawler)?;

        Ok(Self {
            rate_limit: crawler.rate_limit(),
            concurrency: crawler.concurrency as usize,
            scheme: crawler.scheme,
            fetcher,
            matcher: Arc::new(matcher),
        })
    }

    /// Creates a coordinator crawling over `https` with explicit limits
    ///
    /// The rate limit is used exactly as given. Concurrency has no upper
    /// bound here; only zero is rejected.
    pub fn with_limits(
        rate_limit: Duration,
        concurrency: usize,
        matcher: ProductMatcher,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, ScoutError> {
        if concurrency == 0 {
            return Err(ConfigError::Validation("concurrency must be at least 1".to_string()).into());
        }

        Ok(Self {
            scheme: CrawlerConfig::default().scheme,
            rate_limit,
            concurrency,
            fetcher,
            matcher: Arc::new(matcher),
        })
    }

    /// Builds a coordinator with the default HTTP fetcher from a full config
    pub fn from_config(config: &Config) -> Result<Self, ScoutError> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.crawler.request_timeout())?;
        let matcher = ProductMatcher::new(config.classifier.markers.as_slice())?;
        Self::new(config.crawler.clone(), matcher, Arc::new(fetcher))
    }

    /// Crawls every domain concurrently and waits for all of them
    ///
    /// Domains that cannot form a root URL are logged and skipped; duplicates
    /// are crawled once. Every crawled domain gets an entry in the result,
    /// empty if nothing was found.
    pub async fn run(&self, domains: &[String]) -> CrawlOutcome {
        let started_at = Utc::now();
        let admission = AdmissionController::new(self.concurrency);
        let products = ProductIndex::new();

        let ctx = CrawlContext {
            fetcher: Arc::clone(&self.fetcher),
            admission: admission.clone(),
            products: products.clone(),
            matcher: Arc::clone(&self.matcher),
            rate_limit: self.rate_limit,
        };

        tracing::info!(
            "Starting crawl of {} domains (concurrency {}, rate limit {:?})",
            domains.len(),
            admission.capacity(),
            ctx.rate_limit
        );
        tracing::debug!("Product markers: {}", self.matcher.markers().join(", "));

        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut tasks = JoinSet::new();

        for domain in domains {
            if !seen.insert(domain.as_str()) {
                tracing::warn!("Domain {} listed more than once, crawling it once", domain);
                continue;
            }

            let root = match root_url(domain, &self.scheme) {
                Ok(root) => root,
                Err(e) => {
                    tracing::error!("Skipping domain {}: {}", domain, e);
                    continue;
                }
            };

            products.register(domain);
            order.push(domain.clone());

            let traversal = DomainTraversal::new(domain.clone(), root, ctx.clone());
            tasks.spawn(traversal.run());
        }

        let mut finished = Vec::with_capacity(order.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(summary) => finished.push(summary),
                Err(e) => tracing::error!("Domain traversal task failed: {}", e),
            }
        }

        // Restore input order; a panicked task still gets an (empty) summary.
        let summaries = order
            .iter()
            .map(|domain| {
                finished
                    .iter()
                    .position(|s| &s.domain == domain)
                    .map(|i| finished.swap_remove(i))
                    .unwrap_or_else(|| DomainSummary::abandoned(domain.clone()))
            })
            .collect();

        let outcome = CrawlOutcome {
            products: products.snapshot(),
            summaries,
            peak_in_flight: admission.peak_in_flight(),
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            "Crawl finished in {}s: {} product URLs across {} domains",
            outcome.duration().num_seconds(),
            products.total(),
            outcome.products.len()
        );

        outcome
    }
}

/// Runs a crawl with the default HTTP fetcher and product markers
///
/// This is the single entry point for callers that only have a domain list:
/// it awaits every domain's traversal and returns the product URLs found.
///
/// # Arguments
///
/// * `domains` - Bare hostnames to crawl from `https://{domain}`
/// * `rate_limit` - Politeness delay held after each processed page
/// * `concurrency` - Maximum fetches in flight across all domains; must be non-zero
///
/// # Returns
///
/// * `Ok(ProductUrls)` - Product URLs per domain
/// * `Err(ScoutError)` - Zero concurrency, or the HTTP client could not be built
///
/// # Example
///
/// ```no_run
/// use product_scout::run_crawl;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let domains = vec!["www.example.com".to_string()];
/// let products = run_crawl(&domains, Duration::from_millis(10), 50).await?;
/// for (domain, urls) in &products {
///     println!("{}: {} product pages", domain, urls.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    domains: &[String],
    rate_limit: Duration,
    concurrency: usize,
) -> Result<ProductUrls, ScoutError> {
    let timeout = CrawlerConfig::default().request_timeout();
    let fetcher = HttpFetcher::new(&UserAgentConfig::default(), timeout)?;
    let coordinator = Coordinator::with_limits(
        rate_limit,
        concurrency,
        ProductMatcher::default(),
        Arc::new(fetcher),
    )?;

    Ok(coordinator.run(domains).await.products)
}
