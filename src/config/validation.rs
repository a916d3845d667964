use crate::config::types::{ClassifierConfig, Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::url::root_url;
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_classifier_config(&config.classifier)?;
    validate_output_config(&config.output)?;
    validate_domains(&config.domains, &config.crawler.scheme)?;
    Ok(())
}

/// Validates crawler configuration
pub(crate) fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 || config.concurrency > 1000 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 1000, got {}",
            config.concurrency
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.scheme != "https" && config.scheme != "http" {
        return Err(ConfigError::Validation(format!(
            "scheme must be 'https' or 'http', got '{}'",
            config.scheme
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if let Some(contact_url) = &config.contact_url {
        Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;
    }

    Ok(())
}

/// Validates product markers
fn validate_classifier_config(config: &ClassifierConfig) -> Result<(), ConfigError> {
    if config.markers.is_empty() {
        return Err(ConfigError::InvalidMarker(
            "at least one product marker is required".to_string(),
        ));
    }

    for marker in &config.markers {
        if marker.trim().is_empty() {
            return Err(ConfigError::InvalidMarker(
                "product marker cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.results_path.is_empty() {
        return Err(ConfigError::Validation(
            "results_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the domain list
///
/// Every entry must build a root URL under `scheme`, and no domain may be
/// listed twice.
fn validate_domains(domains: &[String], scheme: &str) -> Result<(), ConfigError> {
    if domains.is_empty() {
        return Err(ConfigError::Validation(
            "at least one domain is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for domain in domains {
        root_url(domain, scheme)
            .map_err(|e| ConfigError::InvalidDomain(format!("'{}': {}", domain, e)))?;

        if !seen.insert(domain.as_str()) {
            return Err(ConfigError::InvalidDomain(format!(
                "'{}' is listed more than once",
                domain
            )));
        }
    }

    Ok(())
}
