//! Breadth-first traversal of a single domain
//!
//! Each traversal owns its frontier and visited set outright and processes
//! one page at a time. The only things it shares with other domains are the
//! admission controller and the product index.

use crate::crawler::admission::AdmissionController;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::extract_links;
use crate::state::{DomainState, DomainSummary};
use crate::storage::ProductIndex;
use crate::url::ProductMatcher;
use crate::ScoutError;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Collaborators shared by every traversal in a run
#[derive(Clone)]
pub struct CrawlContext {
    /// Fetch capability
    pub fetcher: Arc<dyn PageFetcher>,

    /// Global fetch capacity gate
    pub admission: AdmissionController,

    /// Shared product URL index
    pub products: ProductIndex,

    /// Compiled product classifier
    pub matcher: Arc<ProductMatcher>,

    /// Politeness delay held after each processed page
    pub rate_limit: Duration,
}

/// One domain's breadth-first exploration
pub struct DomainTraversal {
    state: DomainState,
    ctx: CrawlContext,
}

impl DomainTraversal {
    /// Creates an idle traversal for `domain` rooted at `root`
    pub fn new(domain: impl Into<String>, root: Url, ctx: CrawlContext) -> Self {
        Self {
            state: DomainState::new(domain, root),
            ctx,
        }
    }

    /// Runs the traversal until the frontier is exhausted
    ///
    /// Page-level failures are logged and skipped; a domain whose root cannot
    /// be fetched simply finishes with nothing recorded.
    pub async fn run(mut self) -> DomainSummary {
        if let Err(e) = self.crawl().await {
            tracing::error!("Traversal of {} stopped: {}", self.state.domain, e);
        }

        if let Err(e) = self.state.finish() {
            tracing::warn!("{}: {}", self.state.domain, e);
        }

        let summary = self.state.summary();
        tracing::info!(
            "Finished {}: {} pages fetched, {} failed, {} product URLs",
            summary.domain,
            summary.pages_fetched,
            summary.fetch_failures + summary.parse_failures,
            summary.products_found
        );
        summary
    }

    async fn crawl(&mut self) -> Result<(), ScoutError> {
        self.state.start()?;
        tracing::debug!("Starting traversal of {}", self.state.root);

        while let Some(url) = self.state.next_url() {
            if !self.state.mark_visited(&url) {
                self.state.skipped_visited += 1;
                continue;
            }

            let token = self.ctx.admission.acquire().await?;
            self.process_page(&url).await;
            token.release();
        }

        Ok(())
    }

    /// Fetches one page, records its product links and queues the rest
    ///
    /// Runs while the caller holds an admission token. The politeness delay
    /// only applies to pages that were fetched and parsed.
    async fn process_page(&mut self, url: &Url) {
        tracing::info!("Crawling: {}", url);

        let body = match self.ctx.fetcher.fetch(url).await.into_body(url) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Error fetching {}: {}", url, e);
                self.state.fetch_failures += 1;
                return;
            }
        };
        self.state.pages_fetched += 1;

        let links = match extract_links(&body, &self.state.root) {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!("Error parsing links on {}: {}", url, e);
                self.state.parse_failures += 1;
                return;
            }
        };

        for link in links {
            if self.ctx.matcher.is_product(&link) {
                tracing::debug!("Product page on {}: {}", self.state.domain, link);
                self.ctx.products.record(&self.state.domain, link.as_str());
                self.state.products_found += 1;
            } else if !self.state.is_visited(&link) {
                self.state.enqueue(link);
            }
        }

        tracing::trace!(
            "{}: {} queued, {} visited",
            self.state.domain,
            self.state.frontier_len(),
            self.state.visited_len()
        );

        tokio::time::sleep(self.ctx.rate_limit).await;
    }
}
