//! Storage module for crawl results
//!
//! This module holds the result aggregator shared by all domain traversals:
//! an in-memory, mutex-guarded mapping from domain to discovered product URLs.
//! Nothing is persisted here; writing the results out is the output module's job.

mod index;

pub use index::{ProductIndex, ProductUrls};
