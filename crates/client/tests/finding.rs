mod common;

use std::time::Duration;

use cardscout_client::{
    Backoff, FindingError, PageSource, RetrievalError, RetrievalOptions, Retriever, RetryPolicy, finding,
};
use cardscout_core::{Query, TitleParser, TitlePatterns};
use httpmock::{Method::GET, MockServer};

const PATH: &str = "/services/search/FindingService/v1";

fn no_wait(max_retries: Option<u32>) -> RetryPolicy {
    RetryPolicy { max_retries, backoff: Backoff::Fixed(Duration::ZERO) }
}

fn no_delay(max_pages: u32) -> RetrievalOptions {
    RetrievalOptions { max_pages, delay: Duration::ZERO, debug: true }
}

#[tokio::test]
async fn offline_fetch_page_sends_finding_parameters() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(PATH)
            .query_param("OPERATION-NAME", "findItemsByKeywords")
            .query_param("SERVICE-VERSION", "1.0.0")
            .query_param("SECURITY-APPNAME", "test-app")
            .query_param("RESPONSE-DATA-FORMAT", "JSON")
            .query_param("keywords", "1986 sports trading card")
            .query_param("paginationInput.entriesPerPage", "100")
            .query_param("paginationInput.pageNumber", "1")
            .query_param("outputSelector", "PictureURLLarge");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::read_fixture("find_items_page1.json"));
    });

    let client = common::client_for(&server.url(PATH));
    let resp = client.fetch_page(&Query::for_year(1986), 1).await.unwrap();
    mock.assert();

    let items = finding::extract_items(&resp);
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].item_id, "266512345678");
    assert_eq!(items[2].gallery_url, "");
    assert_eq!(finding::total_pages(&resp), 2);
}

#[tokio::test]
async fn offline_fetch_page_maps_error_status() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path(PATH);
        then.status(500).body("internal error");
    });

    let client = common::client_for(&server.url(PATH));
    let err = client.fetch_page(&Query::for_year(1986), 1).await.unwrap_err();
    assert!(matches!(err, FindingError::HttpError { status: 500 }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn offline_fetch_page_rejects_malformed_body() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path(PATH);
        then.status(200).header("content-type", "application/json").body("{not json");
    });

    let client = common::client_for(&server.url(PATH));
    let err = client.fetch_page(&Query::for_year(1986), 1).await.unwrap_err();
    assert!(matches!(err, FindingError::Parse(_)));
}

#[tokio::test]
async fn offline_retrieve_year_walks_all_pages() {
    let server = MockServer::start();

    let page1 = server.mock(|when, then| {
        when.method(GET).path(PATH).query_param("paginationInput.pageNumber", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::read_fixture("find_items_page1.json"));
    });
    let page2 = server.mock(|when, then| {
        when.method(GET).path(PATH).query_param("paginationInput.pageNumber", "2");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::read_fixture("find_items_page2.json"));
    });

    let client = common::client_for(&server.url(PATH));
    let patterns = TitlePatterns::new().unwrap();
    let retriever = Retriever::new(&client, TitleParser::new(&patterns), no_delay(0), no_wait(Some(0)));

    let set = retriever.retrieve_year(&Query::for_year(1986)).await.unwrap();
    page1.assert_calls(1);
    page2.assert_calls(1);

    let records = set.records();
    assert_eq!(records.len(), 4);

    assert_eq!(records[0].player, "Michael Jordan");
    assert_eq!(records[0].grade.as_deref(), Some("PSA 8"));
    assert_eq!(records[0].card_number.as_deref(), Some("57"));

    assert_eq!(records[1].player, "Jose Canseco");
    assert_eq!(records[1].grade.as_deref(), Some("BGS 9.5"));
    assert_eq!(records[1].card_number.as_deref(), Some("20T"));

    assert_eq!(records[2].player, "1986");
    assert_eq!(records[2].grade, None);
    assert_eq!(records[2].card_number, None);

    assert_eq!(records[3].player, "Bo Jackson");
    assert_eq!(records[3].grade.as_deref(), Some("SGC 7"));
    assert_eq!(records[3].card_number.as_deref(), Some("1"));
}

#[tokio::test]
async fn offline_retrieve_year_gives_up_after_retry_cap() {
    let server = MockServer::start();

    let failing = server.mock(|when, then| {
        when.method(GET).path(PATH);
        then.status(503);
    });

    let client = common::client_for(&server.url(PATH));
    let patterns = TitlePatterns::new().unwrap();
    let retriever = Retriever::new(&client, TitleParser::new(&patterns), no_delay(0), no_wait(Some(2)));

    let err = retriever.retrieve_year(&Query::for_year(1986)).await.unwrap_err();
    failing.assert_calls(3);
    assert!(matches!(
        err,
        RetrievalError::RetriesExhausted { page: 1, attempts: 3, source: FindingError::HttpError { status: 503 } }
    ));
}
