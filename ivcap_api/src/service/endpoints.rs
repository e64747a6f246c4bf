use super::paths;
use super::types::ServiceDescriptionT;
use super::views::{ServiceListRTView, ServiceStatusRTView};
use crate::common::ListQuery;
use ivcap_core::internal::{Empty, JsonView, RequestError, json_body, require};
use ivcap_core::prelude::*;
use http::{Method, StatusCode};

const SERVICE: &str = "service";

const LIST_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
];

const CREATE_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
    ErrorKind::NotAvailable,
];

const READ_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::NotFound,
    ErrorKind::NotImplemented,
];

const UPDATE_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::NotFound,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
    ErrorKind::NotAvailable,
];

fn validate_description(d: &ServiceDescriptionT) -> Result<(), RequestError> {
    let mut v = ValidationError::new();
    if let Some(id) = &d.provider_id {
        v.uri("body.provider-id", id);
    }
    if let Some(id) = &d.account_id {
        v.uri("body.account-id", id);
    }
    v.into_result().map_err(RequestError::InvalidPayload)
}

#[derive(Clone, Debug)]
pub struct ListPayload {
    pub query: ListQuery,
    pub jwt: SecretString,
}

impl ListPayload {
    pub fn new(jwt: impl Into<SecretString>) -> Self {
        Self {
            query: ListQuery::default(),
            jwt: jwt.into(),
        }
    }

    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = query;
        self
    }
}

impl Endpoint for ListPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "list";
    const METHOD: Method = Method::GET;
    const ERRORS: &'static [ErrorKind] = LIST_ERRORS;
    type Response = JsonView<ServiceListRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        self.query.validate().map_err(RequestError::InvalidPayload)
    }

    fn path(&self) -> String {
        paths::list_service_path()
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        self.query.apply(policy);
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct CreatePayload {
    pub services: ServiceDescriptionT,
    pub jwt: SecretString,
}

impl CreatePayload {
    pub fn new(services: ServiceDescriptionT, jwt: impl Into<SecretString>) -> Self {
        Self {
            services,
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for CreatePayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "create";
    const METHOD: Method = Method::POST;
    const SUCCESS: &'static [StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
    const ERRORS: &'static [ErrorKind] = CREATE_ERRORS;
    type Response = JsonView<ServiceStatusRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        validate_description(&self.services)
    }

    fn path(&self) -> String {
        paths::create_service_path()
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        json_body(&self.services)
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
    type Response = JsonView<ServiceStatusRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)
    }

    fn path(&self) -> String {
        paths::read_service_path(&self.id)
    }
}

/// Replaces a service description. With `force_create` the gateway creates
/// the service when `id` is unknown.
#[derive(Clone, Debug)]
pub struct UpdatePayload {
    pub id: String,
    pub force_create: Option<bool>,
    pub services: ServiceDescriptionT,
    pub jwt: SecretString,
}

impl UpdatePayload {
    pub fn new(
        id: impl Into<String>,
        services: ServiceDescriptionT,
        jwt: impl Into<SecretString>,
    ) -> Self {
        Self {
            id: id.into(),
            force_create: None,
            services,
            jwt: jwt.into(),
        }
    }
}

optional_setters!(UpdatePayload { force_create: bool });

impl Endpoint for UpdatePayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "update";
    const METHOD: Method = Method::PUT;
    const ERRORS: &'static [ErrorKind] = UPDATE_ERRORS;
    type Response = JsonView<ServiceStatusRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)?;
        validate_description(&self.services)
    }

    fn path(&self) -> String {
        paths::update_service_path(&self.id)
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        policy.push_query_opt("force-create", self.force_create);
        Ok(())
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        json_body(&self.services)
    }
}

#[derive(Clone, Debug)]
pub struct DeletePayload {
    pub id: String,
    pub jwt: SecretString,
}

impl DeletePayload {
    pub fn new(id: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            id: id.into(),
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for DeletePayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "delete";
    const METHOD: Method = Method::DELETE;
    const SUCCESS: &'static [StatusCode] = &[StatusCode::NO_CONTENT];
    const ERRORS: &'static [ErrorKind] = READ_ERRORS;
    type Response = Empty;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)
    }

    fn path(&self) -> String {
        paths::delete_service_path(&self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::types::{BasicWorkflowOptsT, ParameterDefT, WorkflowT};

    fn description() -> ServiceDescriptionT {
        ServiceDescriptionT {
            name: "Fire risk per region".into(),
            description: "Computes fire risk".into(),
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
                    command: vec!["/bin/sh".into(), "-c".into(), "echo $PATH".into()],
                    ..BasicWorkflowOptsT::default()
                }),
                ..WorkflowT::default()
            },
            provider_id: Some("urn:ivcap:provider:p1".into()),
            ..ServiceDescriptionT::default()
        }
    }

    #[test]
    fn description_wire_shape() {
        let body = serde_json::to_value(description()).unwrap();
        assert_eq!(body["provider-id"], "urn:ivcap:provider:p1");
        assert_eq!(body["parameters"][0]["type"], "string");
        assert_eq!(body["workflow"]["basic"]["image"], "alpine");
        assert!(body.get("account-id").is_none());
        assert!(body.get("tags").is_none());
    }

    #[test]
    fn malformed_provider_is_rejected() {
        let mut d = description();
        d.provider_id = Some("p1".into());
        let err = CreatePayload::new(d, "t").validate().unwrap_err();
        assert!(matches!(err, RequestError::InvalidPayload(_)));
    }

    #[test]
    fn force_create_only_when_set() {
        let mut p = Policy::new();
        UpdatePayload::new("s1", description(), "t").policy(&mut p).unwrap();
        assert!(p.query().is_empty());

        let mut p = Policy::new();
        UpdatePayload::new("s1", description(), "t")
            .force_create(true)
            .policy(&mut p)
            .unwrap();
        assert_eq!(p.query(), &[("force-create".to_string(), "true".to_string())]);
    }
}
