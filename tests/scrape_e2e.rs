mod common;

use std::time::Duration;

use topic_scraper::crawl::Paginator;
use topic_scraper::fetch::HttpFetcher;
use topic_scraper::output::read_topic_records;
use topic_scraper::scrape::{scrape_topics_repos, TopicStatus};
use topic_scraper::{Config, Repository};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_listing(server: &MockServer) {
    let pages = [
        ("1", common::listing_page(&[("3D", "3d"), ("Ajax", "ajax")])),
        ("2", common::listing_page(&[("Algorithm", "algorithm")])),
        ("3", common::listing_page(&[])),
    ];
    for (page, body) in pages {
        Mock::given(method("GET"))
            .and(path("/topics"))
            .and(query_param("page", page))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }
}

fn config_for(server: &MockServer, output_dir: &std::path::Path) -> Config {
    Config {
        output_dir: output_dir.to_path_buf(),
        timeout: Duration::from_secs(5),
        ..Config::with_base_url(&server.uri()).unwrap()
    }
}

#[tokio::test]
async fn discovers_listing_pages() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path());
    let fetcher = HttpFetcher::new(config.timeout).unwrap();

    let pages = Paginator::new(&fetcher, &config).discover_page_count().await.unwrap();
    assert_eq!(pages, 2);

    let listing = Paginator::new(&fetcher, &config).collect_topics().await.unwrap();
    let titles: Vec<&str> = listing.topics.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["3D", "Ajax", "Algorithm"]);
    assert_eq!(listing.topics[0].description, "All about 3D.");
    assert_eq!(listing.topics[0].url, format!("{}/topics/3d", server.uri()));
}

#[tokio::test]
async fn scrapes_topics_isolates_failures_and_skips_finished_topics() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    // Each topic page must be fetched only once across both runs
    Mock::given(method("GET"))
        .and(path("/topics/3d"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::topic_page(&[
            ("mrdoob", "three.js", "94.2k"),
            ("libgdx", "libgdx", "22.6k"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/topics/ajax"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::topic_page(&[(
            "jquery", "jquery", "57k",
        )])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/topics/algorithm"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("out");
    let config = config_for(&server, &output_dir);
    let fetcher = HttpFetcher::new(config.timeout).unwrap();

    let report = scrape_topics_repos(&fetcher, &config).await.unwrap();
    assert_eq!(report.pages, 2);
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].status, TopicStatus::Written { rows: 2 });
    assert_eq!(report.results[1].status, TopicStatus::Written { rows: 1 });
    assert!(matches!(report.results[2].status, TopicStatus::Failed { .. }));
    assert_eq!(report.failures().len(), 1);
    assert!(!output_dir.join("Algorithm.csv").exists());

    let repos = read_topic_records(&output_dir.join("3D.csv")).unwrap();
    assert_eq!(
        repos[0],
        Repository {
            owner: "mrdoob".to_string(),
            name: "three.js".to_string(),
            star_count: 94200,
            url: format!("{}/mrdoob/three.js", server.uri()),
        }
    );
    assert_eq!(repos[1].star_count, 22600);

    let rerun = scrape_topics_repos(&fetcher, &config).await.unwrap();
    assert_eq!(rerun.results[0].status, TopicStatus::Skipped);
    assert_eq!(rerun.results[1].status, TopicStatus::Skipped);
    assert!(matches!(rerun.results[2].status, TopicStatus::Failed { .. }));
    assert_eq!(rerun.skipped(), 2);
}

#[tokio::test]
async fn concurrent_run_keeps_listing_order_and_skips_finished_topics() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    // Earlier topics answer slower, so they finish last
    for (slug, owner, delay_ms) in [("3d", "mrdoob", 400), ("ajax", "jquery", 200), ("algorithm", "trekhleb", 0)] {
        Mock::given(method("GET"))
            .and(path(format!("/topics/{}", slug)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(common::topic_page(&[(owner, slug, "1k")]))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        concurrency: 3,
        ..config_for(&server, dir.path())
    };
    let fetcher = HttpFetcher::new(config.timeout).unwrap();

    let report = scrape_topics_repos(&fetcher, &config).await.unwrap();
    let titles: Vec<&str> = report.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["3D", "Ajax", "Algorithm"]);
    for result in &report.results {
        assert_eq!(result.status, TopicStatus::Written { rows: 1 });
    }
    let repos = read_topic_records(&dir.path().join("3D.csv")).unwrap();
    assert_eq!(repos[0].owner, "mrdoob");

    let rerun = scrape_topics_repos(&fetcher, &config).await.unwrap();
    assert_eq!(rerun.skipped(), 3);
    assert!(rerun.failures().is_empty());
}

#[tokio::test]
async fn listing_failure_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, dir.path());
    let fetcher = HttpFetcher::new(config.timeout).unwrap();

    assert!(scrape_topics_repos(&fetcher, &config).await.is_err());
}
