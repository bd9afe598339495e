use std::time::Duration;

use pretty_assertions::assert_eq;
use scroll_engine::{FetchError, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(settings: FetchSettings) -> ReqwestFetcher {
    ReqwestFetcher::new(settings).expect("client builds")
}

async fn serve(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn next_page_is_returned_with_its_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collections/all"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<div id=\"product-grid\"></div>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/collections/all?page=2", server.uri());
    let response = fetcher(FetchSettings::default()).fetch(&url).await.expect("fetch ok");

    assert_eq!(response.url, url);
    assert_eq!(response.status, 200);
    assert_eq!(response.charset(), Some("utf-8"));
    assert_eq!(response.body, b"<div id=\"product-grid\"></div>");
}

#[tokio::test]
async fn redirected_page_reports_where_it_landed() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/collections/sale",
        ResponseTemplate::new(301).insert_header("Location", "/collections/all?page=2"),
    )
    .await;
    serve(
        &server,
        "/collections/all",
        ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
    )
    .await;

    let response = fetcher(FetchSettings::default())
        .fetch(&format!("{}/collections/sale", server.uri()))
        .await
        .expect("fetch ok");
    assert_eq!(response.url, format!("{}/collections/all?page=2", server.uri()));
}

#[tokio::test]
async fn redirect_loops_are_cut_off() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/loop",
        ResponseTemplate::new(302).insert_header("Location", "/loop"),
    )
    .await;

    let settings = FetchSettings {
        redirect_limit: 2,
        ..FetchSettings::default()
    };
    let err = fetcher(settings)
        .fetch(&format!("{}/loop", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::TooManyRedirects);
}

#[tokio::test]
async fn missing_page_is_not_found() {
    let server = MockServer::start().await;
    serve(&server, "/missing", ResponseTemplate::new(404)).await;

    let err = fetcher(FetchSettings::default())
        .fetch(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Status(404));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn server_error_is_not_end_of_data() {
    let server = MockServer::start().await;
    serve(&server, "/broken", ResponseTemplate::new(503)).await;

    let err = fetcher(FetchSettings::default())
        .fetch(&format!("{}/broken", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Status(503));
    assert!(!err.is_not_found());
    assert_eq!(err.to_string(), "server answered 503");
}

#[tokio::test]
async fn hung_request_times_out() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/slow",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_millis(250))
            .set_body_raw("<html></html>", "text/html"),
    )
    .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let err = fetcher(settings)
        .fetch(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Timeout);
}

#[tokio::test]
async fn json_endpoint_is_not_a_listing() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/products.json",
        ResponseTemplate::new(200).set_body_raw("{}", "application/json"),
    )
    .await;

    let err = fetcher(FetchSettings::default())
        .fetch(&format!("{}/products.json", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::NotHtml("application/json".to_string()));
}

#[tokio::test]
async fn oversized_page_is_refused() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/large",
        ResponseTemplate::new(200).set_body_raw("<p>0123456789</p>", "text/html"),
    )
    .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let err = fetcher(settings)
        .fetch(&format!("{}/large", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::TooLarge { limit: 10 });
}

#[tokio::test]
async fn malformed_url_never_reaches_the_network() {
    let err = fetcher(FetchSettings::default())
        .fetch("not a url")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}
