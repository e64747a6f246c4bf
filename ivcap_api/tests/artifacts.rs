mod common;
use common::*;

use bytes::Bytes;
use http::{Method, StatusCode};
use ivcap_api::artifact::endpoints::{
    AddCollectionPayload, AddMetadataPayload, ListPayload, ReadPayload, RemoveCollectionPayload,
    RemoveMetadataPayload, UploadPayload, UploadRequestData,
};
use ivcap_core::prelude::*;
use ivcap_test_support::{MockReply, assert_request};
use serde_json::json;

#[tokio::test]
async fn upload_streams_content_and_decodes_status() {
    let reply = MockReply::json(
        StatusCode::CREATED,
        Bytes::from_static(br#"{"id":"urn:ivcap:artifact:a1","status":"pending","size":10}"#),
    );
    let (c, h) = client([reply]);

    let data = UploadRequestData::new(
        UploadPayload::new(JWT)
            .name("foo.txt")
            .content_type("text/plain")
            .content_length(10),
        BodyStream::from_bytes(Bytes::from_static(b"0123456789")),
    );
    let out = c.artifacts().upload(data).await.unwrap();

    assert_eq!(out.id, "urn:ivcap:artifact:a1");
    assert_eq!(out.status, "pending");
    assert_eq!(out.size, Some(10));
    assert!(out.collections.is_empty());

    let req = h.last();
    assert_request(&req)
        .operation("artifact", "upload")
        .method(Method::POST)
        .host("gw.test")
        .path("/1/artifacts")
        .header("authorization", &format!("Bearer {JWT}"))
        .header("x-name", "foo.txt")
        .header("content-type", "text/plain")
        .header("content-length", "10")
        .header("accept", "application/json")
        .header_absent("x-collection")
        .streamed()
        .body_eq(b"0123456789");
    h.finish();
}

#[tokio::test]
async fn upload_reports_tus_headers() {
    let reply = MockReply::json(
        StatusCode::OK,
        Bytes::from_static(br#"{"id":"a1","status":"partial"}"#),
    )
    .with_header(http::header::LOCATION, "/1/artifacts/a1".parse().unwrap())
    .with_header(
        http::header::HeaderName::from_static("upload-offset"),
        "4".parse().unwrap(),
    );
    let (c, h) = client([reply]);

    let data = UploadRequestData::new(
        UploadPayload::new(JWT).tus_resumable("1.0.0").upload_length(10),
        BodyStream::from_bytes(Bytes::from_static(b"0123")),
    );
    let out = c.artifacts().upload(data).await.unwrap();
    assert_eq!(out.location.as_deref(), Some("/1/artifacts/a1"));
    assert_eq!(out.tus_offset, Some(4));

    assert_request(&h.last())
        .header("tus-resumable", "1.0.0")
        .header("upload-length", "10");
    h.finish();
}

#[tokio::test]
async fn list_rejection_is_typed() {
    let reply = MockReply::goa_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "invalid-parameter",
        Bytes::from_static(br#"{"message":"top must be >=1"}"#),
    );
    let (c, h) = client([reply]);

    let err = c.artifacts().list(ListPayload::new(JWT)).await.unwrap_err();
    match err.service_error() {
        Some(ServiceError::InvalidParameter(p)) => assert_eq!(p.message, "top must be >=1"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(err.operation(), Some(("artifact", "list")));

    assert_request(&h.last())
        .method(Method::GET)
        .path("/1/artifacts")
        .query_keys_exact(&[]);
    h.finish();
}

#[tokio::test]
async fn list_sends_odata_query() {
    let reply = MockReply::ok_json(Bytes::from_static(
        br#"{"artifacts":[{"id":"a1","mime-type":"text/plain"}],"links":{"self":"/1/artifacts"}}"#,
    ));
    let (c, h) = client([reply]);

    let out = c
        .artifacts()
        .list(ListPayload::new(JWT).filter("name ~= 'foo'").top(5).page_token("p2"))
        .await
        .unwrap();
    assert_eq!(out.artifacts.len(), 1);
    assert_eq!(out.artifacts[0].mime_type.as_deref(), Some("text/plain"));
    assert_eq!(out.links.unwrap().self_.as_deref(), Some("/1/artifacts"));

    assert_request(&h.last())
        .query_has("$filter", "name ~= 'foo'")
        .query_has("$top", "5")
        .query_has("page-token", "p2")
        .query_keys_exact(&["$filter", "$top", "page-token"]);
    h.finish();
}

#[tokio::test]
async fn out_of_range_top_never_reaches_the_wire() {
    let (c, h) = client([]);
    let err = c
        .artifacts()
        .list(ListPayload::new(JWT).top(0))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::InvalidPayload { .. }), "{err:?}");
    h.assert_recorded_len(0);
    h.finish();
}

#[tokio::test]
async fn read_missing_artifact() {
    let reply = MockReply::goa_error(
        StatusCode::NOT_FOUND,
        "not-found",
        Bytes::from_static(br#"{"id":"a9","message":"artifact not found"}"#),
    );
    let (c, h) = client([reply]);

    let err = c.artifacts().read(ReadPayload::new("a9", JWT)).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
    assert_request(&h.last()).path("/1/artifacts/a9");
    h.finish();
}

#[tokio::test]
async fn collection_and_metadata_operations() {
    let (c, h) = client([
        MockReply::status(StatusCode::NO_CONTENT),
        MockReply::status(StatusCode::OK),
        MockReply::status(StatusCode::NO_CONTENT),
    ]);

    c.artifacts()
        .add_collection(AddCollectionPayload::new("a1", "urn:ivcap:collection:c1", JWT))
        .await
        .unwrap();
    c.artifacts()
        .add_metadata(AddMetadataPayload::new(
            "a1",
            "urn:example:schema:1",
            json!({"tag": "fire"}),
            JWT,
        ))
        .await
        .unwrap();
    c.artifacts()
        .remove_metadata(RemoveMetadataPayload::new("a1", "urn:example:schema:1", JWT))
        .await
        .unwrap();

    let reqs = h.recorded();
    assert_request(&reqs[0])
        .operation("artifact", "addCollection")
        .method(Method::PUT)
        .path("/1/artifacts/a1/.collections/urn:ivcap:collection:c1")
        .body_absent();
    assert_request(&reqs[1])
        .method(Method::PUT)
        .path("/1/artifacts/a1/.metadata/urn:example:schema:1")
        .header("content-type", "application/json")
        .body_json(json!({"tag": "fire"}));
    assert_request(&reqs[2])
        .method(Method::DELETE)
        .path("/1/artifacts/a1/.metadata/urn:example:schema:1");
    h.finish();
}

#[tokio::test]
async fn dot_segment_ids_never_reach_the_wire() {
    let (c, h) = client([]);

    let err = c
        .artifacts()
        .remove_collection(RemoveCollectionPayload::new("a1", "..", JWT))
        .await
        .unwrap_err();
    match err {
        ApiClientError::InvalidPayload { source, .. } => {
            assert_eq!(source.errors()[0].field, "path");
        }
        other => panic!("unexpected {other:?}"),
    }

    let err = c.artifacts().read(ReadPayload::new(".", JWT)).await.unwrap_err();
    assert!(matches!(err, ApiClientError::InvalidPayload { .. }), "{err:?}");

    h.assert_recorded_len(0);
    h.finish();
}
