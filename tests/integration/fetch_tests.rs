//! Fetch and bind tests
//!
//! These tests use wiremock to serve robots.txt and check that every
//! retrieval failure collapses to "no restrictions".

use robotxt::client::{connect, HttpFetcher, RobotsClient, RobotsFetcher};
use robotxt::config::Config;
use robotxt::{ConfigError, RobotsError};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROBOTS: &str = "User-agent: *
Disallow: /private/
Allow: /private/public/
Crawl-delay: 4

User-agent: BadBot
Disallow: /

Sitemap: https://example.com/sitemap.xml
Sitemap: https://example.com/news.xml
";

async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

fn robots_url(mock_server: &MockServer) -> Url {
    Url::parse(&format!("{}/robots.txt", mock_server.uri())).expect("Failed to build robots URL")
}

#[tokio::test]
async fn test_fetcher_returns_body_on_success() {
    let mock_server = serve(200, ROBOTS).await;
    let fetcher = HttpFetcher::new(&Config::default()).unwrap();

    let body = fetcher.fetch(&robots_url(&mock_server)).await;
    assert_eq!(body.as_deref(), Some(ROBOTS));
}

#[tokio::test]
async fn test_fetcher_sends_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(&Config::default()).unwrap();
    assert!(fetcher.fetch(&robots_url(&mock_server)).await.is_some());
}

#[tokio::test]
async fn test_fetcher_with_custom_client() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header("user-agent", "custom-agent/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ROBOTS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::builder()
        .user_agent("custom-agent/2.0")
        .build()
        .unwrap();
    let fetcher = HttpFetcher::with_client(client);

    let body = fetcher.fetch(&robots_url(&mock_server)).await;
    assert_eq!(body.as_deref(), Some(ROBOTS));
}

#[tokio::test]
async fn test_fetcher_not_found_is_absent() {
    let mock_server = serve(404, "Not Found").await;
    let fetcher = HttpFetcher::new(&Config::default()).unwrap();

    assert!(fetcher.fetch(&robots_url(&mock_server)).await.is_none());
}

#[tokio::test]
async fn test_fetcher_server_error_is_absent() {
    let mock_server = serve(500, "User-agent: *\nDisallow: /").await;
    let fetcher = HttpFetcher::new(&Config::default()).unwrap();

    assert!(fetcher.fetch(&robots_url(&mock_server)).await.is_none());
}

#[tokio::test]
async fn test_fetcher_timeout_is_absent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nDisallow: /")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.fetch.timeout_secs = 1;
    config.fetch.connect_timeout_secs = 1;
    let fetcher = HttpFetcher::new(&config).unwrap();

    assert!(fetcher.fetch(&robots_url(&mock_server)).await.is_none());
}

#[tokio::test]
async fn test_fetcher_connection_refused_is_absent() {
    // Nothing listens on port 9 (discard) in the test environment
    let fetcher = HttpFetcher::new(&Config::default()).unwrap();
    let url = Url::parse("http://127.0.0.1:9/robots.txt").unwrap();

    assert!(fetcher.fetch(&url).await.is_none());
}

#[tokio::test]
async fn test_client_full_cycle() {
    let mock_server = serve(200, ROBOTS).await;
    let mut client = RobotsClient::from_config(&Config::default()).unwrap();

    client.bind(&mock_server.uri()).await.unwrap();

    assert!(client.is_allowed("mybot", "/index.html"));
    assert!(!client.is_allowed("mybot", "/private/data.html"));
    assert!(client.is_allowed("mybot", "/private/public/page.html"));
    assert!(!client.is_allowed("badbot", "/index.html"));
    assert_eq!(client.crawl_delay("mybot"), Some(4.0));
    assert_eq!(client.crawl_delay("BadBot"), None);
    assert_eq!(
        client.sitemaps(),
        vec![
            "https://example.com/sitemap.xml".to_string(),
            "https://example.com/news.xml".to_string()
        ]
    );
}

#[tokio::test]
async fn test_client_bind_with_path_fetches_root_robots() {
    let mock_server = serve(200, "User-agent: *\nDisallow: /blog/drafts").await;
    let mut client = RobotsClient::from_config(&Config::default()).unwrap();

    client
        .bind(&format!("{}/blog/post-1", mock_server.uri()))
        .await
        .unwrap();

    assert!(!client.is_allowed("mybot", "/blog/drafts/2"));
}

#[tokio::test]
async fn test_client_missing_robots_fails_open() {
    let mock_server = serve(404, "").await;
    let mut client = RobotsClient::from_config(&Config::default()).unwrap();

    client.bind(&mock_server.uri()).await.unwrap();

    assert!(client.is_allowed("mybot", "/private/anything"));
    assert_eq!(client.crawl_delay("mybot"), None);
    assert!(client.sitemaps().is_empty());
    assert!(client.parser().document().is_none());
}

#[tokio::test]
async fn test_client_caches_between_binds() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ROBOTS))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = RobotsClient::from_config(&Config::default()).unwrap();
    client.bind(&mock_server.uri()).await.unwrap();
    client.bind(&mock_server.uri()).await.unwrap();

    assert!(!client.is_allowed("mybot", "/private/x"));
    // The mock server verifies `expect(1)` when dropped
}

#[tokio::test]
async fn test_client_rebind_switches_documents() {
    let first = serve(200, "User-agent: *\nDisallow: /").await;
    let second = serve(200, "User-agent: *\nAllow: /").await;
    let mut client = RobotsClient::from_config(&Config::default()).unwrap();

    client.bind(&first.uri()).await.unwrap();
    assert!(!client.is_allowed("mybot", "/page"));

    client.bind(&second.uri()).await.unwrap();
    assert!(client.is_allowed("mybot", "/page"));
}

#[tokio::test]
async fn test_client_rejects_invalid_target() {
    let mut client = RobotsClient::from_config(&Config::default()).unwrap();

    let result = client.bind("").await;
    assert!(matches!(result, Err(ConfigError::InvalidTarget(_))));
}

#[tokio::test]
async fn test_connect_binds_in_one_step() {
    let mock_server = serve(200, ROBOTS).await;

    let client = connect(&Config::default(), &mock_server.uri()).await.unwrap();
    assert!(!client.is_allowed("badbot", "/"));

    let result = connect(&Config::default(), "   ").await;
    assert!(matches!(
        result,
        Err(RobotsError::Config(ConfigError::InvalidTarget(_)))
    ));
}
