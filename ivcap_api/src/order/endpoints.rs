use super::paths;
use super::types::{LogsRequestT, OrderRequestT, TopRequestT};
use super::views::{OrderListRTView, OrderStatusRTView, OrderTopResultItemView};
use crate::common::ListQuery;
use ivcap_core::internal::{JsonView, JsonViewCollection, RawText, RequestError, json_body, require};
use ivcap_core::prelude::*;
use http::Method;

const SERVICE: &str = "order";

const LIST_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
];

const READ_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::NotFound,
    ErrorKind::NotImplemented,
];

const CREATE_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::NotFound,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
    ErrorKind::NotAvailable,
];

const INSPECT_ERRORS: &[ErrorKind] = &[
    ErrorKind::BadRequest,
    ErrorKind::InvalidCredential,
    ErrorKind::NotAuthorized,
    ErrorKind::InvalidScopes,
    ErrorKind::NotFound,
    ErrorKind::InvalidParameter,
    ErrorKind::NotImplemented,
];

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
    type Response = JsonView<OrderListRTView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        self.query.validate().map_err(RequestError::InvalidPayload)
    }

    fn path(&self) -> String {
        paths::list_order_path()
    }

    fn policy(&self, policy: &mut Policy) -> Result<(), RequestError> {
        self.query.apply(policy);
        Ok(())
    }
}

/// Reads one order. The reply names its view in `goa-view`.
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
    type Response = JsonView<OrderStatusRTView, true>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("id", &self.id)
    }

    fn path(&self) -> String {
        paths::read_order_path(&self.id)
    }
}

/// Places an order. Like read, the reply names its view in `goa-view`.
#[derive(Clone, Debug)]
pub struct CreatePayload {
    pub orders: OrderRequestT,
    pub jwt: SecretString,
}

impl CreatePayload {
    pub fn new(orders: OrderRequestT, jwt: impl Into<SecretString>) -> Self {
        Self {
            orders,
            jwt: jwt.into(),
        }
    }
}

impl Endpoint for CreatePayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "create";
    const METHOD: Method = Method::POST;
    const ERRORS: &'static [ErrorKind] = CREATE_ERRORS;
    type Response = JsonView<OrderStatusRTView, true>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        let mut v = ValidationError::new();
        v.uri("body.serviceID", &self.orders.service_id);
        v.uri("body.accountID", &self.orders.account_id);
        v.into_result().map_err(RequestError::InvalidPayload)
    }

    fn path(&self) -> String {
        paths::create_order_path()
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        json_body(&self.orders)
    }
}

/// Fetches container logs of an order as plain text.
#[derive(Clone, Debug)]
pub struct LogsPayload {
    pub request: LogsRequestT,
    pub jwt: SecretString,
}

impl LogsPayload {
    pub fn new(order_id: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            request: LogsRequestT {
                order_id: order_id.into(),
                ..LogsRequestT::default()
            },
            jwt: jwt.into(),
        }
    }

    pub fn from(mut self, unix_secs: i64) -> Self {
        self.request.from = Some(unix_secs);
        self
    }

    pub fn to(mut self, unix_secs: i64) -> Self {
        self.request.to = Some(unix_secs);
        self
    }

    pub fn namespace_name(mut self, v: impl Into<String>) -> Self {
        self.request.namespace_name = Some(v.into());
        self
    }

    pub fn container_name(mut self, v: impl Into<String>) -> Self {
        self.request.container_name = Some(v.into());
        self
    }
}

impl Endpoint for LogsPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "logs";
    const METHOD: Method = Method::POST;
    const ERRORS: &'static [ErrorKind] = INSPECT_ERRORS;
    type Response = RawText;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("order-id", &self.request.order_id)
    }

    fn path(&self) -> String {
        paths::logs_order_path()
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        json_body(&self.request)
    }
}

/// Resource usage of the containers of a running order.
#[derive(Clone, Debug)]
pub struct TopPayload {
    pub request: TopRequestT,
    pub jwt: SecretString,
}

impl TopPayload {
    pub fn new(order_id: impl Into<String>, jwt: impl Into<SecretString>) -> Self {
        Self {
            request: TopRequestT {
                order_id: order_id.into(),
                namespace_name: None,
            },
            jwt: jwt.into(),
        }
    }

    pub fn namespace_name(mut self, v: impl Into<String>) -> Self {
        self.request.namespace_name = Some(v.into());
        self
    }
}

impl Endpoint for TopPayload {
    const SERVICE: &'static str = SERVICE;
    const NAME: &'static str = "top";
    const METHOD: Method = Method::POST;
    const ERRORS: &'static [ErrorKind] = INSPECT_ERRORS;
    type Response = JsonViewCollection<OrderTopResultItemView>;

    fn jwt(&self) -> &SecretString {
        &self.jwt
    }

    fn validate(&self) -> Result<(), RequestError> {
        require("order-id", &self.request.order_id)
    }

    fn path(&self) -> String {
        paths::top_order_path()
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        json_body(&self.request)
    }
}
