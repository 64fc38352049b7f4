mod common;

use httpmock::prelude::*;
use pawfeed::app::PawfeedError;

#[tokio::test]
async fn test_fetch_emits_fact_and_counts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200)
                .json_body(serde_json::json!({"fact": "Cats sleep 70% of their lives.", "length": 30}));
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    let mut facts = service.subscribe();
    assert_eq!(service.count(), 0);

    let fact = service.fetch().await.expect("fetch should succeed");
    assert_eq!(fact.text, "Cats sleep 70% of their lives.");
    assert_eq!(service.count(), 1);

    let emitted = facts.recv().await.unwrap();
    assert_eq!(emitted.text, "Cats sleep 70% of their lives.");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_each_success_counts_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200).json_body(serde_json::json!({"fact": "Purr."}));
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    for expected in 1..=3 {
        service.fetch().await.unwrap();
        assert_eq!(service.count(), expected);
    }

    assert_eq!(mock.hits_async().await, 3);
}

#[tokio::test]
async fn test_decode_failure_is_silent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    let mut facts = service.subscribe();

    assert!(service.fetch().await.is_none());
    assert_eq!(service.count(), 0);
    assert!(facts.try_recv().is_err());

    let err = service.try_fetch().await.unwrap_err();
    assert!(matches!(err, PawfeedError::Decode(_)));
}

#[tokio::test]
async fn test_missing_field_is_silent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200).json_body(serde_json::json!({"length": 0}));
        })
        .await;

    let service = common::cat_service(server.url("/fact"));

    assert!(service.fetch().await.is_none());
    assert_eq!(service.count(), 0);

    let err = service.try_fetch().await.unwrap_err();
    assert!(matches!(err, PawfeedError::MissingField("fact")));
}

#[tokio::test]
async fn test_http_error_is_silent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(503);
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    let mut facts = service.subscribe();

    assert!(service.fetch().await.is_none());
    assert_eq!(service.count(), 0);
    assert!(facts.try_recv().is_err());

    let err = service.try_fetch().await.unwrap_err();
    assert!(matches!(err, PawfeedError::Http(_)));
}

#[tokio::test]
async fn test_failure_keeps_previous_count() {
    let server = MockServer::start_async().await;
    let mut ok = server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200).json_body(serde_json::json!({"fact": "Meow."}));
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    service.fetch().await.unwrap();
    service.fetch().await.unwrap();
    ok.delete_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(500);
        })
        .await;

    assert!(service.fetch().await.is_none());
    assert_eq!(service.count(), 2);
}

#[tokio::test]
async fn test_reset_is_idempotent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200).json_body(serde_json::json!({"fact": "Whiskers."}));
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    service.fetch().await.unwrap();
    service.fetch().await.unwrap();
    assert_eq!(service.count(), 2);

    service.reset();
    assert_eq!(service.count(), 0);
    service.reset();
    assert_eq!(service.count(), 0);

    service.fetch().await.unwrap();
    assert_eq!(service.count(), 1);
}

#[tokio::test]
async fn test_concurrent_fetches_both_complete() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fact");
            then.status(200)
                .delay(std::time::Duration::from_millis(50))
                .json_body(serde_json::json!({"fact": "Tail."}));
        })
        .await;

    let service = common::cat_service(server.url("/fact"));
    let (a, b) = tokio::join!(service.fetch(), service.fetch());

    assert!(a.is_some());
    assert!(b.is_some());
    assert_eq!(service.count(), 2);
}
