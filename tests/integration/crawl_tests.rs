//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use product_scout::config::{
    ClassifierConfig, Config, CrawlerConfig, OutputConfig, UserAgentConfig,
};
use product_scout::crawler::crawl;
use product_scout::output::{read_results, write_results};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling the given `host:port` domains over plain HTTP
fn create_test_config(domains: Vec<String>) -> Config {
    Config {
        domains,
        crawler: CrawlerConfig {
            rate_limit_ms: 0,
            concurrency: 4,
            request_timeout_secs: 5,
            scheme: "http".to_string(),
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: None,
        },
        classifier: ClassifierConfig::default(),
        output: OutputConfig::default(),
    }
}

/// Extracts `host:port` from a mock server URI
fn domain_of(server: &MockServer) -> String {
    server
        .uri()
        .trim_start_matches("http://")
        .trim_end_matches('/')
        .to_string()
}

async fn mount_page(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts a small shop: root links to a category page and one product,
/// the category links back home and to two more products
async fn mount_shop(server: &MockServer) {
    mount_page(
        server,
        "/",
        r#"<html><body>
        <a href="/category/shoes">Shoes</a>
        <a href="/product/boot-1">Boot</a>
        <a href="https://elsewhere.example/product/ignored">Partner</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        server,
        "/category/shoes",
        r#"<html><body>
        <a href="/">Home</a>
        <a href="/item/sandal-2">Sandal</a>
        <a href="/dp/B000SNEAKER">Sneaker</a>
        </body></html>"#,
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    mount_shop(&mock_server).await;

    let domain = domain_of(&mock_server);
    let config = create_test_config(vec![domain.clone()]);

    let outcome = crawl(&config).await.expect("Crawl failed");
    let base = mock_server.uri();

    assert_eq!(
        outcome.products[&domain],
        vec![
            format!("{}/product/boot-1", base),
            format!("{}/item/sandal-2", base),
            format!("{}/dp/B000SNEAKER", base),
        ]
    );

    // Root and category fetched once each, products never fetched
    let summary = &outcome.summaries[0];
    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.fetch_failures, 0);
    assert_eq!(summary.products_found, 3);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| !r.url.path().starts_with("/product/")));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_multiple_domains_isolated() {
    let shop = MockServer::start().await;
    mount_shop(&shop).await;

    let store = MockServer::start().await;
    mount_page(
        &store,
        "/",
        r#"<a href="/p/lamp">Lamp</a><a href="/about">About</a>"#,
    )
    .await;
    mount_page(&store, "/about", "<p>No links here</p>").await;

    let shop_domain = domain_of(&shop);
    let store_domain = domain_of(&store);
    let config = create_test_config(vec![shop_domain.clone(), store_domain.clone()]);

    let outcome = crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.products.len(), 2);
    assert_eq!(outcome.products[&shop_domain].len(), 3);
    assert_eq!(
        outcome.products[&store_domain],
        vec![format!("{}/p/lamp", store.uri())]
    );
    assert!(outcome.products[&shop_domain]
        .iter()
        .all(|u| u.starts_with(&shop.uri())));
    assert!(outcome.peak_in_flight <= 4);
}

#[tokio::test]
async fn test_failing_root_yields_empty_entry() {
    let healthy = MockServer::start().await;
    mount_shop(&healthy).await;

    let broken = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken)
        .await;

    let healthy_domain = domain_of(&healthy);
    let broken_domain = domain_of(&broken);
    let config = create_test_config(vec![broken_domain.clone(), healthy_domain.clone()]);

    let outcome = crawl(&config).await.expect("Crawl failed");

    assert!(outcome.products[&broken_domain].is_empty());
    assert_eq!(outcome.products[&healthy_domain].len(), 3);

    assert_eq!(outcome.summaries[0].domain, broken_domain);
    assert_eq!(outcome.summaries[0].fetch_failures, 1);
    assert_eq!(outcome.summaries[0].pages_fetched, 0);
}

#[tokio::test]
async fn test_unreachable_domain_yields_empty_entry() {
    // Bind and release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead_domain = listener.local_addr().unwrap().to_string();
    drop(listener);

    let config = create_test_config(vec![dead_domain.clone()]);
    let outcome = crawl(&config).await.expect("Crawl failed");

    assert_eq!(outcome.products.len(), 1);
    assert!(outcome.products[&dead_domain].is_empty());
    assert_eq!(outcome.summaries[0].fetch_failures, 1);
}

#[tokio::test]
async fn test_failed_page_does_not_stop_domain() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/fine">Fine</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/fine", r#"<a href="/product/found">Found</a>"#).await;

    let domain = domain_of(&mock_server);
    let outcome = crawl(&create_test_config(vec![domain.clone()]))
        .await
        .expect("Crawl failed");

    assert_eq!(
        outcome.products[&domain],
        vec![format!("{}/product/found", mock_server.uri())]
    );
    assert_eq!(outcome.summaries[0].fetch_failures, 1);
    assert_eq!(outcome.summaries[0].pages_fetched, 2);
}

#[tokio::test]
async fn test_results_file_written() {
    let mock_server = MockServer::start().await;
    mount_shop(&mock_server).await;

    let domain = domain_of(&mock_server);
    let outcome = crawl(&create_test_config(vec![domain.clone()]))
        .await
        .expect("Crawl failed");

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("product_urls.json");
    write_results(&outcome.products, &results_path).unwrap();

    let saved = read_results(&results_path).unwrap();
    assert_eq!(saved, outcome.products);
    assert_eq!(saved[&domain].len(), 3);
}
