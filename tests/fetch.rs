use std::time::Duration;

use topic_scraper::fetch::{Fetch, HttpFetcher};
use topic_scraper::ScrapeError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_body_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let body = fetcher.fetch(&format!("{}/topics", server.uri())).await.unwrap();
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let url = format!("{}/missing", server.uri());
    let err = fetcher.fetch(&url).await.unwrap_err();

    match err {
        ScrapeError::Fetch { url: failed, reason } => {
            assert_eq!(failed, url);
            assert_eq!(reason, "HTTP 404");
        }
        other => panic!("expected fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(Duration::from_millis(50)).unwrap();
    let err = fetcher.fetch(&format!("{}/slow", server.uri())).await.unwrap_err();

    match err {
        ScrapeError::Fetch { reason, .. } => assert_eq!(reason, "Request timed out"),
        other => panic!("expected fetch error, got {:?}", other),
    }
}
