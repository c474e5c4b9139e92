use std::sync::Arc;
use std::time::{Duration, Instant};

use question_aggregator::models::SourceName;
use question_aggregator::{
    Aggregator, CompanyCatalog, Config, Error, HttpSourceClient, ProblemSource,
};

fn client_for(source: SourceName, url: String) -> HttpSourceClient {
    let config = Config::default().with_endpoint(source, url);
    HttpSourceClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn test_fetch_leetcode_listing_skips_paid() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/api/problems/all/")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "stat_status_pairs": [
                    {"stat": {"question__title": "Two Sum", "question__title_slug": "two-sum",
                              "total_acs": 1000, "total_submitted": 2000},
                     "difficulty": {"level": 1}, "paid_only": false},
                    {"stat": {"question__title": "Premium Lambda", "question__title_slug": "premium-lambda",
                              "total_acs": 1, "total_submitted": 2},
                     "difficulty": {"level": 2}, "paid_only": true}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(
        SourceName::LeetCode,
        format!("{}/api/problems/all/", server.url()),
    );
    let problems = client.fetch(SourceName::LeetCode).await.unwrap();

    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0]["stat"]["question__title"], "Two Sum");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_nested_listing() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/problems")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": {"problems": [{"title": "Uber Eats Menu", "url": "https://x/1"}]}}"#)
        .create_async()
        .await;

    let client = client_for(SourceName::CodingNinjas, format!("{}/problems", server.url()));
    let problems = client.fetch(SourceName::CodingNinjas).await.unwrap();

    assert_eq!(problems.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/challenges")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let client = client_for(SourceName::HackerRank, format!("{}/challenges", server.url()));
    let err = client.fetch(SourceName::HackerRank).await.unwrap_err();

    match err {
        Error::SourceStatus { source_name, status } => {
            assert_eq!(source_name, SourceName::HackerRank);
            assert_eq!(status.as_u16(), 503);
        }
        other => panic!("unexpected error: {other}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/gfg")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>blocked</html>")
        .create_async()
        .await;

    let client = client_for(SourceName::GeeksForGeeks, format!("{}/gfg", server.url()));
    let err = client.fetch(SourceName::GeeksForGeeks).await.unwrap_err();

    assert!(matches!(err, Error::ParseError(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_times_out() {
    // accepts connections but never writes a response
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stalled = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let mut config = Config::default().with_endpoint(SourceName::LeetCode, format!("http://{addr}/"));
    config.request_timeout_secs = 1;
    let client = HttpSourceClient::new(&config).unwrap();

    let started = Instant::now();
    let err = client.fetch(SourceName::LeetCode).await.unwrap_err();

    match err {
        Error::Network(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(started.elapsed() < Duration::from_secs(5));
    stalled.abort();
}

#[tokio::test]
async fn test_aggregate_over_http_survives_failing_source() {
    let mut server = mockito::Server::new_async().await;

    let leetcode = server
        .mock("GET", "/leetcode")
        .with_status(503)
        .create_async()
        .await;
    let gfg = server
        .mock("GET", "/gfg")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"problems": [
                {"title": "Google Maps Routing", "difficulty": "Hard", "slug": "maps-routing",
                 "accepted": 30, "submitted": 120},
                {"title": "Binary Search", "difficulty": "Easy", "slug": "binary-search"}
            ]}"#,
        )
        .create_async()
        .await;

    // the remaining sources hit unmocked paths and get mockito's 501
    let mut config = Config::default();
    for source in SourceName::ALL {
        let path = match source {
            SourceName::LeetCode => "leetcode",
            SourceName::GeeksForGeeks => "gfg",
            _ => "offline",
        };
        config = config.with_endpoint(source, format!("{}/{}", server.url(), path));
    }
    let client = HttpSourceClient::new(&config).unwrap();
    let aggregator = Aggregator::new(Arc::new(client), Arc::new(CompanyCatalog::new()));

    let problems = aggregator.aggregate("google", None).await;

    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].source, SourceName::GeeksForGeeks);
    assert_eq!(problems[0].title, "Google Maps Routing");
    assert_eq!(problems[0].url, "https://practice.geeksforgeeks.org/problems/maps-routing");
    assert_eq!(problems[0].acceptance_rate, "25.0%");
    leetcode.assert_async().await;
    gfg.assert_async().await;
}
