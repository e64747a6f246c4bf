use super::paths;
use super::views::{AddMetaRTView, ReadMetaRTView};
use ivcap_core::internal::{Empty, JsonView, RequestError, require};
use ivcap_core::prelude::*;
use http::{Method, StatusCode};

const SERVICE: &str = "metadata";

const ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
];

/// Records attached to an entity, optionally narrowed by schema.
#[derive(Clone, Debug, Default)]
pub struct ReadPayload {
    pub entity_id: String,
    /// Schema prefix, `%` acts as a wildcard on the gateway.
    pub schema_filter: Option<String>,
    /// RFC 3339 time the records must have been valid at.
    pub at_time: Option<String>,
    pub jwt: SecretString,
}

impl ReadPayload {
    pub fn new(entity_id: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            entity_id: entity_id.into(),
            jwt: jwt.into(),
            ..Self::default()
        }
    }
}

optional_setters!(ReadPayload {
    schema_filter: String,
    at_time: String,
});

impl Endpoint for ReadPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "read";
    const METHOD: Method = Method::GET;
    const ERRORS: &'static [ErrorKind] = ERRORS;
    type Response = JsonView<ReadMetaRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("entity-id", &self.entity_id)
    }

    fn path(&self) -> String {
        paths::read_metadata_path(&self.entity_id)
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        policy.push_query_opt("$schema-filter", self.schema_filter.as_deref());
        policy.push_query_opt("$at-time", self.at_time.as_deref());
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct AddPayload {
    pub entity_id: String,
    pub schema: String,
    /// Type of the streamed aspect, normally `application/json`.
    pub content_type: Option<String>,
    pub jwt: SecretString,
}

impl AddPayload {
    pub fn new(
        entity_id: impl Into<String>,
        schema: impl Into<String>,
        jwt: impl Into<SecretString>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            schema: schema.into(),
            content_type: None,
            jwt: jwt.into(),
        }
    }
}

optional_setters!(AddPayload { content_type: String });

/// Add payload plus the aspect document, streamed unbuffered.
#[derive(Debug)]
pub struct AddRequestData {
    pub payload: AddPayload,
    pub body: BodyStream,
}

impl AddRequestData {
    pub fn new(payload: AddPayload, body: BodyStream) -> Self {
        Self { payload, body }
    }

    pub async fn from_path(
        payload: AddPayload,
        path: impl AsRef<std::path::Path>,
    ) -> std::io::Result<Self> {
        Ok(Self::new(payload, BodyStream::from_path(path).await?))
    }
}

impl Endpoint for AddRequestData {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "add";
    const METHOD: Method = Method::PUT;
    const ERRORS: &'static [ErrorKind] = ERRORS;
    type Response = JsonView<AddMetaRTView>;

    fn jwt(&self) -> &SecretString {
        &self.payload.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("entity-id", &self.payload.entity_id)?;
        require("schema", &self.payload.schema)
    }

    fn path(&self) -> String {
        paths::add_metadata_path(&self.payload.entity_id, &self.payload.schema)
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        policy.set_header_opt("content-type", self.payload.content_type.as_deref())
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        Ok(RequestBody::Stream(self.body))
    }
}

/// Revokes one record; the entity keeps its other records.
#[derive(Clone, Debug)]
pub struct RevokePayload {
    pub id: String,
    pub jwt: SecretString,
}

impl RevokePayload {
    pub fn new(id: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            id: id.into(),
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for RevokePayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "revoke";
    const METHOD: Method = Method::DELETE;
    const SUCCESS: &'static [StatusCode] = &[StatusCode::NO_CONTENT];
    const ERRORS: &'static [ErrorKind] = ERRORS;
    type Response = Empty;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)
    }

    fn path(&self) -> String {
        paths::revoke_metadata_path(&self.id)
    }
}
