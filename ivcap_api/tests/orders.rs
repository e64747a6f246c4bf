mod common;
use common::*;

use bytes::Bytes;
use http::{Method, StatusCode};
use ivcap_api::order::endpoints::{CreatePayload, ListPayload, LogsPayload, ReadPayload, TopPayload};
use ivcap_api::order::types::OrderRequestT;
use ivcap_api::prelude::*;
use ivcap_test_support::{MockReply, assert_request};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn list_always_sends_limit_and_order() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"{"orders":[{"id":"o1","status":"executing","links":{"self":"/1/orders/o1"}}],
             "at-time":"2024-05-01T10:00:00Z","links":{"self":"/1/orders","next":"/1/orders?page=p2"}}"#,
    ));
    let (c, h) = client([reply]);

    let out = c.orders().list(ListPayload::new(JWT)).await.unwrap();
    assert_eq!(out.orders[0].id, "o1");
    assert_eq!(out.orders[0].status.as_deref(), Some("executing"));
    assert_eq!(out.at_time.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert_eq!(out.links.next.as_deref(), Some("/1/orders?page=p2"));

    assert_request(&h.last())
        .operation("order", "list")
        .path("/1/orders")
        .query_has("limit", "10")
        .query_has("order-desc", "true")
        .query_keys_exact(&["limit", "order-desc"]);
    h.finish();
}

#[tokio::test]
async fn list_with_paging() {
    let reply = MockReply::ok_json(Bytes::from_static(br#"{"orders":[],"links":{}}"#));
    let (c, h) = client([reply]);

    let query = ListQuery::new()
        .limit(25)
        .page("p2")
        .order_by("ordered-at")
        .order_desc(false);
    let out = c
        .orders()
        .list(ListPayload::new(JWT).with_query(query))
        .await
        .unwrap();
    assert!(out.orders.is_empty());

    assert_request(&h.last())
        .query_has("limit", "25")
        .query_has("page", "p2")
        .query_has("order-by", "ordered-at")
        .query_has("order-desc", "false");
    h.finish();
}

#[tokio::test]
async fn create_posts_the_order() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"{"id":"urn:ivcap:order:o1","status":"pending","links":{"self":"/1/orders/o1"},
             "parameters":[{"name":"threshold","value":"10"}]}"#,
    ));
    let (c, h) = client([reply]);

    let order = OrderRequestT::new(
        "urn:ivcap:service:s1",
        "urn:ivcap:account:a1",
        vec![ParameterT::new("threshold", "10")],
    )
    .with_name("Fire risk for Lot2");
    let out = c.orders().create(CreatePayload::new(order, JWT)).await.unwrap();
    assert_eq!(out.id, "urn:ivcap:order:o1");
    assert_eq!(out.parameters, vec![ParameterT::new("threshold", "10")]);

    assert_request(&h.last())
        .method(Method::POST)
        .path("/1/orders")
        .header("content-type", "application/json")
        .body_json(json!({
            "serviceID": "urn:ivcap:service:s1",
            "accountID": "urn:ivcap:account:a1",
            "name": "Fire risk for Lot2",
            "parameters": [{"name": "threshold", "value": "10"}]
        }));
    h.finish();
}

#[tokio::test]
async fn read_honours_default_view_header() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"{"id":"o1","links":{"self":"/1/orders/o1"},"products":[{"id":"p1","size":42}]}"#,
    ))
    .with_header(
        http::header::HeaderName::from_static("goa-view"),
        "default".parse().unwrap(),
    );
    let (c, h) = client([reply]);

    let out = c.orders().read(ReadPayload::new("o1", JWT)).await.unwrap();
    assert_eq!(out.products[0].size, Some(42));
    h.finish();
}

#[tokio::test]
async fn logs_come_back_as_text() {
    let reply = MockReply::ok_text(Bytes::from_static(b"line 1\nline 2\n"));
    let (c, h) = client([reply]);

    let logs = c
        .orders()
        .logs(LogsPayload::new("urn:ivcap:order:o1", JWT).container_name("main"))
        .await
        .unwrap();
    assert_eq!(logs, "line 1\nline 2\n");

    assert_request(&h.last())
        .method(Method::POST)
        .path("/1/orders/logs")
        .header_absent("accept")
        .body_json(json!({"order-id": "urn:ivcap:order:o1", "container-name": "main"}));
    h.finish();
}

#[tokio::test]
async fn top_lists_container_usage() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"[{"container":"main","cpu":"12m","memory":"64Mi","storage":"0","ephemeral-storage":"1Mi"}]"#,
    ));
    let (c, h) = client([reply]);

    let out = c.orders().top(TopPayload::new("o1", JWT)).await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].ephemeral_storage, "1Mi");

    assert_request(&h.last())
        .path("/1/orders/top")
        .body_json(json!({"order-id": "o1"}));
    h.finish();
}

#[tokio::test]
async fn top_item_missing_a_field_is_rejected() {
    let reply = MockReply::ok_json(Bytes::from_static(br#"[{"container":"main"}]"#));
    let (c, h) = client([reply]);
    let err = c.orders().top(TopPayload::new("o1", JWT)).await.unwrap_err();
    assert!(matches!(err, ApiClientError::Validation { .. }), "{err:?}");
    h.finish();
}

#[tokio::test]
async fn per_request_timeout_and_debug_level() {
    let (c, h) = client_with(
        config()
            .with_timeout(Duration::from_secs(30))
            .with_debug_level(DebugLevel::V),
        [
            MockReply::ok_text(Bytes::from_static(b"")),
            MockReply::ok_text(Bytes::from_static(b"")),
            MockReply::ok_text(Bytes::from_static(b"")),
        ],
    );

    c.orders().logs(LogsPayload::new("o1", JWT)).await.unwrap();
    c.request(LogsPayload::new("o1", JWT))
        .timeout(Duration::from_secs(2))
        .debug_level(DebugLevel::VV)
        .await
        .unwrap();
    c.request(LogsPayload::new("o1", JWT)).clear_timeout().await.unwrap();

    let reqs = h.recorded();
    assert_request(&reqs[0]).timeout(Some(Duration::from_secs(30)));
    assert_request(&reqs[1]).timeout(Some(Duration::from_secs(2)));
    assert_request(&reqs[2]).timeout(None);
    h.finish();
}

#[tokio::test]
async fn order_not_found() {
    let reply = MockReply::goa_error(
        StatusCode::NOT_FOUND,
        "not-found",
        Bytes::from_static(br#"{"id":"o9","message":"order not found"}"#),
    );
    let (c, h) = client([reply]);
    let err = c.orders().read(ReadPayload::new("o9", JWT)).await.unwrap_err();
    match err.service_error() {
        Some(ServiceError::NotFound(nf)) => assert_eq!(nf.id, "o9"),
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}
