mod common;
use common::*;

use bytes::Bytes;
use http::{Method, StatusCode};
use ivcap_api::prelude::*;
use ivcap_api::service::endpoints::{
    CreatePayload, DeletePayload, ListPayload, ReadPayload, UpdatePayload,
};
use ivcap_api::service::types::{BasicWorkflowOptsT, ParameterDefT, ServiceDescriptionT, WorkflowT};
use ivcap_test_support::{MockReply, assert_request};

fn description() -> ServiceDescriptionT {
    ServiceDescriptionT {
        name: "Fire risk per region".into(),
        description: "Computes fire risk".into(),
        tags: vec!["fire".into()],
        parameters: vec![ParameterDefT {
            name: "region".into(),
            type_: "string".into(),
            description: "Region to assess".into(),
            ..ParameterDefT::default()
        }],
        workflow: WorkflowT {
            type_: "basic".into(),
            basic: Some(BasicWorkflowOptsT {
                image: "alpine".into(),
                command: vec!["/bin/sh".into()],
                ..BasicWorkflowOptsT::default()
            }),
            ..WorkflowT::default()
        },
        ..ServiceDescriptionT::default()
    }
}

const STATUS: &[u8] = br#"{"id":"urn:ivcap:service:s1","name":"Fire risk per region",
    "tags":["fire"],"parameters":[{"name":"region","type":"string","description":"Region to assess"}],
    "links":{"self":"/1/services/urn:ivcap:service:s1"}}"#;

#[tokio::test]
async fn create_then_read() {
    let (c, h) = client([
        MockReply::json(StatusCode::CREATED, Bytes::from_static(STATUS)),
        MockReply::ok_json(Bytes::from_static(STATUS)),
    ]);

    let created = c.services().create(CreatePayload::new(description(), JWT)).await.unwrap();
    let read = c
        .services()
        .read(ReadPayload::new("urn:ivcap:service:s1", JWT))
        .await
        .unwrap();
    assert_eq!(created, read);
    assert_eq!(read.tags, ["fire"]);
    assert_eq!(read.parameters[0].type_, "string");

    let reqs = h.recorded();
    assert_request(&reqs[0])
        .operation("service", "create")
        .method(Method::POST)
        .path("/1/services")
        .body_present();
    assert_request(&reqs[1])
        .method(Method::GET)
        .path("/1/services/urn:ivcap:service:s1")
        .body_absent();
    h.finish();
}

#[tokio::test]
async fn update_can_force_create() {
    let (c, h) = client([MockReply::ok_json(Bytes::from_static(STATUS))]);
    c.services()
        .update(UpdatePayload::new("urn:ivcap:service:s1", description(), JWT).force_create(true))
        .await
        .unwrap();
    assert_request(&h.last())
        .method(Method::PUT)
        .path("/1/services/urn:ivcap:service:s1")
        .query_has("force-create", "true");
    h.finish();
}

#[tokio::test]
async fn delete_expects_no_content() {
    let (c, h) = client([
        MockReply::status(StatusCode::NO_CONTENT),
        MockReply::status(StatusCode::OK),
    ]);
    c.services().delete(DeletePayload::new("s1", JWT)).await.unwrap();

    // 200 is not a declared success for delete.
    let err = c.services().delete(DeletePayload::new("s1", JWT)).await.unwrap_err();
    assert!(matches!(err, ApiClientError::InvalidResponse { .. }), "{err:?}");

    assert_request(&h.last()).method(Method::DELETE).path("/1/services/s1");
    h.finish();
}

#[tokio::test]
async fn list_uses_new_generation_query() {
    let (c, h) = client([MockReply::ok_json(Bytes::from_static(
        br#"{"services":[{"id":"s1","links":{}}],"links":{}}"#,
    ))]);
    let out = c
        .services()
        .list(ListPayload::new(JWT).with_query(ListQuery::new().filter("name ~= 'fire'")))
        .await
        .unwrap();
    assert_eq!(out.services[0].id, "s1");
    assert_request(&h.last()).query_keys_exact(&["limit", "filter", "order-desc"]);
    h.finish();
}

#[tokio::test]
async fn scope_rejection() {
    let reply = MockReply::goa_error(
        StatusCode::FORBIDDEN,
        "invalid-scopes",
        Bytes::from_static(br#"{"message":"missing scope services:write"}"#),
    );
    let (c, h) = client([reply]);
    let err = c
        .services()
        .create(CreatePayload::new(description(), JWT))
        .await
        .unwrap_err();
    match err.service_error() {
        Some(ServiceError::InvalidScopes(s)) => {
            assert_eq!(s.id, None);
            assert_eq!(s.message, "missing scope services:write");
        }
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}
