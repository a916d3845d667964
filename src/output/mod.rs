//! Output module for crawl results and reports
//!
//! This module handles:
//! - Writing the product URL mapping as a JSON file
//! - Computing and printing crawl statistics

mod json;
pub mod stats;

pub use json::{read_results, results_to_json, write_results};
pub use stats::{compute_statistics, print_statistics, CrawlStatistics};
