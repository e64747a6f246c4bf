mod common;
use common::*;

use bytes::Bytes;
use http::StatusCode;
use http::header::HeaderName;
use ivcap_api::artifact::endpoints::ReadPayload as ReadArtifact;
use ivcap_api::order::endpoints::{CreatePayload, ReadPayload as ReadOrder};
use ivcap_api::order::types::OrderRequestT;
use ivcap_api::prelude::*;
use ivcap_test_support::MockReply;

fn order_request() -> OrderRequestT {
    OrderRequestT::new(
        "urn:ivcap:service:s1",
        "urn:ivcap:account:a1",
        vec![ParameterT::new("threshold", "10")],
    )
}

#[tokio::test]
async fn unauthorized_body_is_never_read() {
    let reply = MockReply::status(StatusCode::UNAUTHORIZED)
        .with_body(Bytes::from_static(b"{\"message\":\"ignored\"}"));
    let (c, h) = client([reply]);

    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotAuthorized));
    assert_eq!(h.body_reads(), 0);
    h.finish();
}

#[tokio::test]
async fn bad_request_is_split_by_discriminator() {
    let (c, h) = client([
        MockReply::goa_error(
            StatusCode::BAD_REQUEST,
            "bad-request",
            Bytes::from_static(br#"{"message":"no such filter field"}"#),
        ),
        MockReply::goa_error(StatusCode::BAD_REQUEST, "invalid-credential", Bytes::new()),
    ]);

    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::BadRequest));
    assert_eq!(
        err.service_error().and_then(ServiceError::message),
        Some("no such filter field")
    );

    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    assert!(matches!(
        err.service_error(),
        Some(ServiceError::InvalidCredential(_))
    ));
    h.finish();
}

#[tokio::test]
async fn unknown_discriminator_is_an_invalid_response() {
    let reply = MockReply::goa_error(
        StatusCode::BAD_REQUEST,
        "quota-exceeded",
        Bytes::from_static(b"{\"message\":\"slow down\"}"),
    );
    let (c, h) = client([reply]);

    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    match err {
        ApiClientError::InvalidResponse { status, body, .. } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.contains("slow down"), "{body}");
        }
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}

#[tokio::test]
async fn undeclared_status_is_an_invalid_response() {
    // Artifact read does not declare 422.
    let reply = MockReply::goa_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "invalid-parameter",
        Bytes::from_static(b"{\"message\":\"x\"}"),
    );
    let (c, h) = client([reply]);
    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    assert!(matches!(err, ApiClientError::InvalidResponse { .. }), "{err:?}");
    h.finish();
}

#[tokio::test]
async fn order_create_can_be_unavailable() {
    let reply = MockReply::goa_error(StatusCode::SERVICE_UNAVAILABLE, "not-available", Bytes::new());
    let (c, h) = client([reply]);

    let err = c
        .orders()
        .create(CreatePayload::new(order_request(), JWT))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotAvailable));
    assert_eq!(err.operation(), Some(("order", "create")));
    h.finish();
}

#[tokio::test]
async fn unknown_view_name_fails_validation() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"{"id":"urn:ivcap:order:o1","links":{"self":"/1/orders/o1"}}"#,
    ))
    .with_header(HeaderName::from_static("goa-view"), "tiny".parse().unwrap());
    let (c, h) = client([reply]);

    let err = c.orders().read(ReadOrder::new("o1", JWT)).await.unwrap_err();
    match err {
        ApiClientError::Validation { source, .. } => assert_eq!(source.errors()[0].field, "view"),
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}

#[tokio::test]
async fn create_reply_honours_the_view_header() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"{"id":"urn:ivcap:order:o1","links":{"self":"/1/orders/o1"}}"#,
    ))
    .with_header(HeaderName::from_static("goa-view"), "tiny".parse().unwrap());
    let (c, h) = client([reply]);

    let err = c
        .orders()
        .create(CreatePayload::new(order_request(), JWT))
        .await
        .unwrap_err();
    match err {
        ApiClientError::Validation { source, .. } => assert_eq!(source.errors()[0].field, "view"),
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}

#[tokio::test]
async fn missing_required_field_fails_validation() {
    let reply = MockReply::ok_json(Bytes::from_static(br#"{"name":"no id"}"#));
    let (c, h) = client([reply]);

    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    match err {
        ApiClientError::Validation { source, .. } => {
            let fields: Vec<_> = source.errors().iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["id", "status"]);
        }
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}

#[tokio::test]
async fn malformed_body_is_a_decoding_error() {
    let reply = MockReply::ok_json(Bytes::from_static(b"{\"id\":"));
    let (c, h) = client([reply]);
    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    match err {
        ApiClientError::Decoding { body, .. } => assert_eq!(body, "{\"id\":"),
        other => panic!("unexpected {other:?}"),
    }
    h.finish();
}

#[tokio::test]
async fn empty_body_is_a_decoding_error() {
    let (c, h) = client([
        MockReply::ok_json(Bytes::new()),
        MockReply::goa_error(StatusCode::NOT_FOUND, "not-found", Bytes::new()),
    ]);

    let err = c.artifacts().read(ReadArtifact::new("a1", JWT)).await.unwrap_err();
    assert!(matches!(err, ApiClientError::Decoding { .. }), "{err:?}");

    let err = c.artifacts().read(ReadArtifact::new("a2", JWT)).await.unwrap_err();
    assert!(matches!(err, ApiClientError::Decoding { .. }), "{err:?}");
    h.finish();
}

#[tokio::test]
async fn transport_failure_names_the_operation() {
    let (c, h) = client([MockReply::transport_error("connection refused")]);

    let err = c.orders().read(ReadOrder::new("o1", JWT)).await.unwrap_err();
    assert!(err.is_transport());
    match &err {
        ApiClientError::Request {
            service, method, ..
        } => assert_eq!((*service, *method), ("order", "read")),
        other => panic!("unexpected {other:?}"),
    }
    assert!(err.to_string().contains("connection refused"), "{err}");
    h.finish();
}

#[tokio::test]
async fn empty_jwt_fails_before_sending() {
    let (c, h) = client([]);
    let err = c.artifacts().read(ReadArtifact::new("a1", "")).await.unwrap_err();
    assert!(
        matches!(err, ApiClientError::MissingField { field: "jwt", .. }),
        "{err:?}"
    );
    h.assert_recorded_len(0);
    h.finish();
}

#[tokio::test]
async fn restored_body_is_kept_on_the_response() {
    let body = br#"{"id":"a1","status":"ready"}"#;
    let (c, h) = client_with(
        config().with_restore_response_body(true),
        [MockReply::ok_json(Bytes::from_static(body))],
    );

    let resp = c
        .request(ReadArtifact::new("a1", JWT))
        .execute_decoded()
        .await
        .unwrap();
    assert_eq!(resp.value.status, "ready");
    assert_eq!(resp.raw_body.as_deref(), Some(&body[..]));
    h.finish();
}

#[tokio::test]
async fn body_is_dropped_by_default() {
    let (c, h) = client([MockReply::ok_json(Bytes::from_static(
        br#"{"id":"a1","status":"ready"}"#,
    ))]);
    let resp = c
        .request(ReadArtifact::new("a1", JWT))
        .execute_decoded()
        .await
        .unwrap();
    assert!(resp.raw_body.is_none());
    h.finish();
}
