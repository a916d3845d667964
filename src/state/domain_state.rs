use crate::state::TraversalState;
use crate::ScoutError;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Tracks the private state of one domain traversal
///
/// The frontier and visited set are owned by a single traversal task and are
/// never shared, so no synchronization is needed here.
#[derive(Debug, Clone)]
pub struct DomainState {
    /// The domain being traversed
    pub domain: String,

    /// The root URL the frontier is seeded with
    pub root: Url,

    /// Pending URLs in discovery order
    frontier: VecDeque<Url>,

    /// URLs already dequeued for fetching
    visited: HashSet<String>,

    /// Current lifecycle state
    state: TraversalState,

    /// Pages fetched successfully
    pub pages_fetched: u64,

    /// Pages whose fetch failed (network error or non-success status)
    pub fetch_failures: u64,

    /// Pages whose HTML yielded no links because extraction failed
    pub parse_failures: u64,

    /// Product URLs recorded for this domain
    pub products_found: u64,

    /// Frontier entries discarded because they were already visited
    pub skipped_visited: u64,
}

impl DomainState {
    /// Creates an idle traversal state with an empty frontier
    pub fn new(domain: impl Into<String>, root: Url) -> Self {
        Self {
            domain: domain.into(),
            root,
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            state: TraversalState::Idle,
            pages_fetched: 0,
            fetch_failures: 0,
            parse_failures: 0,
            products_found: 0,
            skipped_visited: 0,
        }
    }

    /// Seeds the frontier with the root URL and moves to `Running`
    pub fn start(&mut self) -> Result<(), ScoutError> {
        self.transition_to(TraversalState::Running)?;
        self.frontier.push_back(self.root.clone());
        Ok(())
    }

    /// Pops the head of the frontier
    ///
    /// Moves to `Draining` when the pop leaves the frontier empty.
    pub fn next_url(&mut self) -> Option<Url> {
        let url = self.frontier.pop_front()?;
        if self.frontier.is_empty() && self.state == TraversalState::Running {
            self.state = TraversalState::Draining;
        }
        Some(url)
    }

    /// Marks a URL visited, returning false if it already was
    pub fn mark_visited(&mut self, url: &Url) -> bool {
        self.visited.insert(url.as_str().to_string())
    }

    /// Returns true if the URL has already been dequeued for fetching
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Appends a URL to the frontier tail
    ///
    /// A traversal in `Draining` goes back to `Running`.
    pub fn enqueue(&mut self, url: Url) {
        self.frontier.push_back(url);
        if self.state == TraversalState::Draining {
            self.state = TraversalState::Running;
        }
    }

    /// Moves the traversal to `Done`
    pub fn finish(&mut self) -> Result<(), ScoutError> {
        self.transition_to(TraversalState::Done)
    }

    /// Returns the current lifecycle state
    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// Number of URLs waiting in the frontier
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of distinct URLs dequeued so far
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Builds the summary reported once the traversal ends
    pub fn summary(&self) -> DomainSummary {
        DomainSummary {
            domain: self.domain.clone(),
            state: self.state,
            pages_visited: self.visited.len() as u64,
            pages_fetched: self.pages_fetched,
            fetch_failures: self.fetch_failures,
            parse_failures: self.parse_failures,
            products_found: self.products_found,
            skipped_visited: self.skipped_visited,
        }
    }

    fn transition_to(&mut self, next: TraversalState) -> Result<(), ScoutError> {
        if !self.state.can_transition_to(next) {
            return Err(ScoutError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}

/// Per-domain counters reported when a traversal ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSummary {
    pub domain: String,
    pub state: TraversalState,
    pub pages_visited: u64,
    pub pages_fetched: u64,
    pub fetch_failures: u64,
    pub parse_failures: u64,
    pub products_found: u64,
    pub skipped_visited: u64,
}

impl DomainSummary {
    /// Summary for a domain whose traversal never produced one (e.g. a panicked task)
    pub fn abandoned(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            state: TraversalState::Done,
            pages_visited: 0,
            pages_fetched: 0,
            fetch_failures: 0,
            parse_failures: 0,
            products_found: 0,
            skipped_visited: 0,
        }
    }
}
