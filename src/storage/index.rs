//! Shared product URL index
//!
//! The one piece of state written by every concurrent domain traversal.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot of discovered product URLs keyed by domain
pub type ProductUrls = BTreeMap<String, Vec<String>>;

/// Mapping from domain to the product URLs discovered for it
///
/// Cloning the index is cheap and every clone shares the same map. Each
/// mutation is a short critical section under one mutex; sequences only ever
/// grow and keep the order in which their traversal recorded them.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    inner: Arc<Mutex<HashMap<String, Vec<String>>>>,
}

impl ProductIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a domain has an entry, even if nothing is ever recorded for it
    pub fn register(&self, domain: &str) {
        self.lock().entry(domain.to_string()).or_default();
    }

    /// Appends a product URL to a domain's sequence, creating it on first use
    pub fn record(&self, domain: &str, url: &str) {
        self.lock()
            .entry(domain.to_string())
            .or_default()
            .push(url.to_string());
    }

    /// Number of product URLs recorded for a domain
    pub fn count(&self, domain: &str) -> usize {
        self.lock().get(domain).map_or(0, Vec::len)
    }

    /// Total number of product URLs across all domains
    pub fn total(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    /// Returns a copy of the current contents, ordered by domain
    pub fn snapshot(&self) -> ProductUrls {
        self.lock()
            .iter()
            .map(|(domain, urls)| (domain.clone(), urls.clone()))
            .collect()
    }

    // A writer that panicked mid-push leaves the map structurally valid, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
