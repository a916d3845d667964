//! State module for tracking crawl progress
//!
//! This module provides the per-domain traversal state: the lifecycle, the
//! frontier, the visited set, and the counters reported at the end.
//!
//! # Components
//!
//! - `TraversalState`: Lifecycle of a domain traversal (idle, running, draining, done)
//! - `DomainState`: Frontier, visited set and counters owned by one traversal
//! - `DomainSummary`: Counters reported once a traversal ends

mod domain_state;
mod traversal_state;

// Re-export main types
pub use domain_state::{DomainState, DomainSummary};
pub use traversal_state::TraversalState;
