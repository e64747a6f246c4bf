use super::paths;
use super::types::ArtifactStatusRT;
use super::views::{ArtifactListRTView, ArtifactStatusRTView};
use ivcap_core::internal::{
    ContentType, DecodeError, Decodes, Empty, Format, FormatType, JsonView, RequestError,
    ResponseSpec, json_body, require,
};
use ivcap_core::prelude::*;
use ivcap_core::validate::FieldErrorKind;
use bytes::Bytes;
use http::header::LOCATION;
use http::{HeaderMap, Method, StatusCode};

const SERVICE: &str = "artifact";

const READ_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::NotFound,
    ErrorKind::NotImplemented,
];

const LIST_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
];

const OK_OR_NO_CONTENT: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];

/// Lists artifacts. Query keys use the OData names.
#[derive(Clone, Debug, Default)]
pub struct ListPayload {
    pub filter: Option<String>,
    pub orderby: Option<String>,
    /// 1..=50.
    pub top: Option<i64>,
    pub skip: Option<i64>,
    pub select: Option<String>,
    /// Deprecated by the gateway in favour of `skip`.
    pub offset: Option<i64>,
    /// Deprecated by the gateway in favour of `top`. 1..=50.
    pub limit: Option<i64>,
    pub page_token: Option<String>,
    pub jwt: SecretString,
}

impl ListPayload {
    pub fn new(jwt: impl Into<SecretString>) -> Self {
        Self {
            jwt: jwt.into(),
            ..Self::default()
        }
    }
}

optional_setters!(ListPayload {
    filter: String,
    orderby: String,
    top: i64,
    skip: i64,
    select: String,
    offset: i64,
    limit: i64,
    page_token: String,
});

impl Endpoint for ListPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "list";
    const METHOD: Method = Method::GET;
    const ERRORS: &'static [ErrorKind] = LIST_ERRORS;
    type Response = JsonView<ArtifactListRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        let mut v = ValidationError::new();
        if let Some(top) = self.top {
            v.range("$top", top, Some(1), Some(50));
        }
        if let Some(skip) = self.skip {
            v.range("$skip", skip, Some(0), None);
        }
        if let Some(offset) = self.offset {
            v.range("offset", offset, Some(0), None);
        }
        if let Some(limit) = self.limit {
            v.range("limit", limit, Some(1), Some(50));
        }
        v.into_result().map_err(RequestError::InvalidPayload)
    }

    fn path(&self) -> String {
        paths::list_artifact_path()
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        policy.push_query_opt("$filter", self.filter.as_deref());
        policy.push_query_opt("$orderby", self.orderby.as_deref());
        policy.push_query_opt("$top", self.top);
        policy.push_query_opt("$skip", self.skip);
        policy.push_query_opt("$select", self.select.as_deref());
        policy.push_query_opt("offset", self.offset);
        policy.push_query_opt("limit", self.limit);
        policy.push_query_opt("page-token", self.page_token.as_deref());
        Ok(())
    }
}

/// Header fields of an upload. All of them are optional.
#[derive(Clone, Debug, Default)]
pub struct UploadPayload {
    /// Type of the uploaded content.
    pub content_type: Option<String>,
    pub content_encoding: Option<String>,
    pub content_length: Option<i64>,
    /// Friendlier name; reusing one does not replace an existing artifact.
    pub name: Option<String>,
    pub collection: Option<String>,
    /// Content type announced by an initial, empty creation request.
    pub x_content_type: Option<String>,
    pub x_content_length: Option<i64>,
    /// Expected size, TUS protocol.
    pub upload_length: Option<i64>,
    /// TUS protocol version.
    pub tus_resumable: Option<String>,
    pub jwt: SecretString,
}

impl UploadPayload {
    pub fn new(jwt: impl Into<SecretString>) -> Self {
        Self {
            jwt: jwt.into(),
            ..Self::default()
        }
    }
}

optional_setters!(UploadPayload {
    content_type: String,
    content_encoding: String,
    content_length: i64,
    name: String,
    collection: String,
    x_content_type: String,
    x_content_length: i64,
    upload_length: i64,
    tus_resumable: String,
});

/// Upload payload plus the content, streamed to the gateway unbuffered.
#[derive(Debug)]
pub struct UploadRequestData {
    pub payload: UploadPayload,
    pub body: BodyStream,
}

impl UploadRequestData {
    pub fn new(payload: UploadPayload, body: BodyStream) -> Self {
        Self { payload, body }
    }

    /// Streams the file at `path`.
    pub async fn from_path(
        payload: UploadPayload,
        path: impl AsRef<std::path::Path>,
    ) -> std::io::Result<Self> {
        Ok(Self::new(payload, BodyStream::from_path(path).await?))
    }
}

impl Endpoint for UploadRequestData {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "upload";
    const METHOD: Method = Method::POST;
    const SUCCESS: &'static [StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
    const ERRORS: &'static [ErrorKind] = LIST_ERRORS;
    type Response = UploadResponse;

    fn jwt(&self) -> &SecretString {
        &self.payload.jwt
    }

    fn path(&self) -> String {
        paths::upload_artifact_path()
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        let p = &self.payload;
        policy.set_header_opt("content-type", p.content_type.as_deref())?;
        policy.set_header_opt("content-encoding", p.content_encoding.as_deref())?;
        policy.set_header_opt(
            "content-length",
            p.content_length.map(|n| n.to_string()).as_deref(),
        )?;
        policy.set_header_opt("x-name", p.name.as_deref())?;
        policy.set_header_opt("x-collection", p.collection.as_deref())?;
        policy.set_header_opt("x-content-type", p.x_content_type.as_deref())?;
        policy.set_header_opt(
            "x-content-length",
            p.x_content_length.map(|n| n.to_string()).as_deref(),
        )?;
        policy.set_header_opt(
            "upload-length",
            p.upload_length.map(|n| n.to_string()).as_deref(),
        )?;
        policy.set_header_opt("tus-resumable", p.tus_resumable.as_deref())?;
        Ok(())
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        Ok(RequestBody::Stream(self.body))
    }
}

/// Upload result: the JSON status merged with the `Location`,
/// `Tus-Resumable` and `Upload-Offset` response headers.
pub struct UploadResponse;

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

impl ResponseSpec for UploadResponse {
    type Output = ArtifactStatusRT;
    const ACCEPT: &'static str = Json::CONTENT_TYPE;
    const FORMAT: Format = Json::FORMAT_TYPE;

    fn decode(
        _: StatusCode,
        headers: &HeaderMap,
        body: &Bytes,
    ) -> Result<ArtifactStatusRT, DecodeError> {
        let mut view: ArtifactStatusRTView = <Json as Decodes<ArtifactStatusRTView>>::decode(body)
            .map_err(|e| DecodeError::Decoding(Box::new(e)))?;
        view.location = header_string(headers, LOCATION.as_str());
        view.tus_resumable = header_string(headers, "tus-resumable");
        if let Some(raw) = header_string(headers, "upload-offset") {
            let offset = raw.trim().parse::<i64>().map_err(|_| {
                let mut v = ValidationError::new();
                v.push(
                    "tusOffset",
                    FieldErrorKind::Format {
                        value: raw.clone(),
                        format: "integer",
                    },
                );
                DecodeError::Validation(v)
            })?;
            view.tus_offset = Some(offset);
        }
        Ok(Viewed::new(view, DEFAULT_VIEW).resolve()?)
    }
}

#[derive(Clone, Debug)]
pub struct ReadPayload {
    pub id: String,
    pub jwt: SecretString,
}

impl ReadPayload {
    pub fn new(id: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            id: id.into(),
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for ReadPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "read";
    const METHOD: Method = Method::GET;
    const ERRORS: &'static [ErrorKind] = READ_ERRORS;
    type Response = JsonView<ArtifactStatusRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)
    }

    fn path(&self) -> String {
        paths::read_artifact_path(&self.id)
    }
}

/// Adds an artifact to a collection.
#[derive(Clone, Debug)]
pub struct AddCollectionPayload {
    pub id: String,
    pub name: String,
    pub jwt: SecretString,
}

impl AddCollectionPayload {
    pub fn new(id: impl Into<String>, name: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for AddCollectionPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "addCollection";
    const METHOD: Method = Method::PUT;
    const SUCCESS: &'static [StatusCode] = OK_OR_NO_CONTENT;
    const ERRORS: &'static [ErrorKind] = READ_ERRORS;
    type Response = Empty;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)?;
        require("name", &self.name)
    }

    fn path(&self) -> String {
        paths::add_collection_artifact_path(&self.id, &self.name)
    }
}

#[derive(Clone, Debug)]
pub struct RemoveCollectionPayload {
    pub id: String,
    pub name: String,
    pub jwt: SecretString,
}

impl RemoveCollectionPayload {
    pub fn new(id: impl Into<String>, name: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for RemoveCollectionPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "removeCollection";
    const METHOD: Method = Method::DELETE;
    const SUCCESS: &'static [StatusCode] = OK_OR_NO_CONTENT;
    const ERRORS: &'static [ErrorKind] = READ_ERRORS;
    type Response = Empty;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)?;
        require("name", &self.name)
    }

    fn path(&self) -> String {
        paths::remove_collection_artifact_path(&self.id, &self.name)
    }
}

/// Attaches metadata of `schema`, replacing any existing record with that schema.
#[derive(Clone, Debug)]
pub struct AddMetadataPayload {
    pub id: String,
    pub schema: String,
    /// Sent as the JSON request body.
    pub meta: serde_json::Value,
    pub jwt: SecretString,
}

impl AddMetadataPayload {
    pub fn new(
        id: impl Into<String>,
        schema: impl Into<String>,
        meta: serde_json::Value,
        jwt: impl Into<SecretString>,
    ) -> Self {
        Self {
            id: id.into(),
            schema: schema.into(),
            meta,
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for AddMetadataPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "addMetadata";
    const METHOD: Method = Method::PUT;
    const SUCCESS: &'static [StatusCode] = OK_OR_NO_CONTENT;
    const ERRORS: &'static [ErrorKind] = READ_ERRORS;
    type Response = Empty;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)?;
        require("schema", &self.schema)
    }

    fn path(&self) -> String {
        paths::add_metadata_artifact_path(&self.id, &self.schema)
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        json_body(&self.meta)
    }
}

#[derive(Clone, Debug)]
pub struct RemoveMetadataPayload {
    pub id: String,
    pub schema: String,
    pub jwt: SecretString,
}

impl RemoveMetadataPayload {
    pub fn new(
        id: impl Into<String>,
        schema: impl Into<String>,
        jwt: impl Into<SecretString>,
    ) -> Self {
        Self {
            id: id.into(),
            schema: schema.into(),
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for RemoveMetadataPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "removeMetadata";
    const METHOD: Method = Method::DELETE;
    const SUCCESS: &'static [StatusCode] = OK_OR_NO_CONTENT;
    const ERRORS: &'static [ErrorKind] = READ_ERRORS;
    type Response = Empty;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)?;
        require("schema", &self.schema)
    }

    fn path(&self) -> String {
        paths::remove_metadata_artifact_path(&self.id, &self.schema)
    }
}
