//! Product-Scout main entry point
//!
//! This is the command-line interface for the Product-Scout product page crawler.

use clap::Parser;
use product_scout::config::{load_config_with_hash, Config};
use product_scout::crawler::crawl;
use product_scout::output::{compute_statistics, print_statistics, write_results};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Product-Scout: a breadth-first product page discoverer
///
/// Product-Scout crawls each configured domain outward from its root page,
/// following same-domain links, and records every URL that looks like a
/// product page. Results are written as JSON grouped by domain.
#[derive(Parser, Debug)]
#[command(name = "product-scout")]
#[command(version)]
#[command(about = "A breadth-first product page discoverer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Write results here instead of the configured results path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let results_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.results_path));

    if cli.dry_run {
        handle_dry_run(&config, &results_path);
    } else {
        handle_crawl(&config, &results_path, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("product_scout=info,warn"),
            1 => EnvFilter::new("product_scout=debug,info"),
            2 => EnvFilter::new("product_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config, results_path: &Path) {
    println!("=== Product-Scout Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Rate limit: {}ms", config.crawler.rate_limit_ms);
    println!("  Concurrency: {}", config.crawler.concurrency);
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );
    println!("  Scheme: {}", config.crawler.scheme);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nProduct Markers ({}):", config.classifier.markers.len());
    for marker in &config.classifier.markers {
        println!("  - {}", marker);
    }

    println!("\nOutput:");
    println!("  Results: {}", results_path.display());

    println!("\nDomains ({}):", config.domains.len());
    for domain in &config.domains {
        println!("  - {}://{}/", config.crawler.scheme, domain);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start crawling {} domains",
        config.domains.len()
    );
}

/// Handles the main crawl operation
async fn handle_crawl(
    config: &Config,
    results_path: &Path,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Domains: {}, concurrency: {}, rate limit: {}ms",
        config.domains.len(),
        config.crawler.concurrency,
        config.crawler.rate_limit_ms
    );

    let outcome = match crawl(config).await {
        Ok(outcome) => {
            tracing::info!("Crawl completed successfully");
            outcome
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    write_results(&outcome.products, results_path)?;

    if !quiet {
        print_statistics(&compute_statistics(&outcome));
    }

    Ok(())
}
