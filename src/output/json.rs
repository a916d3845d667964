//! JSON results file
//!
//! The results file is the plain domain → product URL mapping, pretty-printed
//! with two-space indentation.

use crate::storage::ProductUrls;
use crate::ScoutError;
use std::fs;
use std::path::Path;

/// Serializes the product mapping to a pretty-printed JSON string
pub fn results_to_json(products: &ProductUrls) -> Result<String, ScoutError> {
    Ok(serde_json::to_string_pretty(products)?)
}

/// Writes the product mapping to `path`, replacing any existing file
///
/// # Arguments
///
/// * `products` - Product URLs per domain
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(ScoutError)` - Serialization or IO failure
pub fn write_results(products: &ProductUrls, path: &Path) -> Result<(), ScoutError> {
    let json = results_to_json(products)?;
    fs::write(path, json)?;
    tracing::info!("Results saved to {}", path.display());
    Ok(())
}

/// Reads a results file back into a product mapping
pub fn read_results(path: &Path) -> Result<ProductUrls, ScoutError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> ProductUrls {
        let mut products = ProductUrls::new();
        products.insert(
            "www.example.com".to_string(),
            vec![
                "https://www.example.com/product/1".to_string(),
                "https://www.example.com/dp/B0".to_string(),
            ],
        );
        products.insert("empty.example.org".to_string(), vec![]);
        products
    }

    #[test]
    fn test_json_layout() {
        let json = results_to_json(&sample()).unwrap();
        let expected = r#"{
  "empty.example.org": [],
  "www.example.com": [
    "https://www.example.com/product/1",
    "https://www.example.com/dp/B0"
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_write_and_read_results() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("product_urls.json");

        write_results(&sample(), &path).unwrap();
        assert_eq!(read_results(&path).unwrap(), sample());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(matches!(
            write_results(&sample(), &path),
            Err(ScoutError::Io(_))
        ));
    }

    #[test]
    fn test_read_invalid_json_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(read_results(&path), Err(ScoutError::Json(_))));
    }
}
