use std::time::Duration;

use pagewatch_engine::{FailureKind, FetchSettings, HttpTextFetcher, TextFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetcher_returns_extracted_visible_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><head><title>News</title><script>var x = 1;</script></head>\
             <body><h1>Headline</h1><p>  Body text.  </p></body></html>",
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let fetcher = HttpTextFetcher::new(FetchSettings::default()).expect("client");
    let url = format!("{}/doc", server.uri());

    let text = fetcher.fetch_text(&url).await.expect("fetch ok");
    assert_eq!(text, "News\nHeadline\nBody text.");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpTextFetcher::new(FetchSettings::default()).expect("client");
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch_text(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = HttpTextFetcher::new(settings).expect("client");
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch_text(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = HttpTextFetcher::new(settings).expect("client");
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch_text(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11),
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_malformed_url() {
    let fetcher = HttpTextFetcher::new(FetchSettings::default()).expect("client");

    let err = fetcher.fetch_text("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
