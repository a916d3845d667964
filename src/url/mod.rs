//! URL handling module for Product-Scout
//!
//! This module provides href resolution, same-host comparison, domain root
//! construction, and product page classification.

mod domain;
mod matcher;
mod resolve;

// Re-export main functions
pub use domain::{host_key, root_url};
pub use matcher::{is_product_url, ProductMatcher};
pub use resolve::{hosts_match, resolve, resolve_href, same_host};
