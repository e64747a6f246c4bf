//! The gateway's closed set of typed rejections.
//!
//! Each kind maps to exactly one HTTP status. Kinds that share a status
//! (`bad-request` and `invalid-credential` on 400) are told apart by the
//! `goa-error` response header.

use crate::validate::ValidationError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Response header naming the error kind.
pub const ERROR_HEADER: &str = "goa-error";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    BadRequest,
    InvalidCredential,
    InvalidParameter,
    InvalidScopes,
    NotImplemented,
    NotFound,
    NotAvailable,
    NotAuthorized,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::BadRequest,
        ErrorKind::InvalidCredential,
        ErrorKind::InvalidParameter,
        ErrorKind::InvalidScopes,
        ErrorKind::NotImplemented,
        ErrorKind::NotFound,
        ErrorKind::NotAvailable,
        ErrorKind::NotAuthorized,
    ];

    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::BadRequest | ErrorKind::InvalidCredential => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidParameter => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::InvalidScopes => StatusCode::FORBIDDEN,
            ErrorKind::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::NotAvailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::NotAuthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// Discriminator value sent in `goa-error`.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad-request",
            ErrorKind::InvalidCredential => "invalid-credential",
            ErrorKind::InvalidParameter => "invalid-parameter",
            ErrorKind::InvalidScopes => "invalid-scopes",
            ErrorKind::NotImplemented => "not-implemented",
            ErrorKind::NotFound => "not-found",
            ErrorKind::NotAvailable => "not-available",
            ErrorKind::NotAuthorized => "not-authorized",
        }
    }

    pub fn from_name(name: &str) -> Option<ErrorKind> {
        ErrorKind::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Kinds whose response carries no body worth reading.
    pub fn has_body(self) -> bool {
        !matches!(
            self,
            ErrorKind::InvalidCredential | ErrorKind::NotAvailable | ErrorKind::NotAuthorized
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bad arguments supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadRequestT {
    pub message: String,
}

/// Provided credential is not valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvalidCredentialsT;

/// A query or body parameter was rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidParameterValue {
    pub name: Option<String>,
    pub value: Option<String>,
    pub message: String,
}

/// Caller not authorized to access required scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidScopesT {
    pub id: Option<String>,
    pub message: String,
}

/// Method is not yet implemented.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotImplementedT {
    pub message: String,
}

/// Attempt to manage a resource that does not exist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceNotFoundT {
    pub id: String,
    pub message: String,
}

/// Service necessary to fulfil the request is currently not available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceNotAvailableT;

/// Unauthorized access to resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnauthorizedT;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    #[error("bad arguments supplied: {}", .0.message)]
    BadRequest(BadRequestT),
    #[error("provided credential is not valid")]
    InvalidCredential(InvalidCredentialsT),
    #[error("invalid parameter: {}", .0.message)]
    InvalidParameter(InvalidParameterValue),
    #[error("caller not authorized to access required scope: {}", .0.message)]
    InvalidScopes(InvalidScopesT),
    #[error("method is not yet implemented: {}", .0.message)]
    NotImplemented(NotImplementedT),
    #[error("resource not found: {} ({})", .0.message, .0.id)]
    NotFound(ResourceNotFoundT),
    #[error("service not available")]
    NotAvailable(ServiceNotAvailableT),
    #[error("unauthorized access to resource")]
    NotAuthorized(UnauthorizedT),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::BadRequest(_) => ErrorKind::BadRequest,
            ServiceError::InvalidCredential(_) => ErrorKind::InvalidCredential,
            ServiceError::InvalidParameter(_) => ErrorKind::InvalidParameter,
            ServiceError::InvalidScopes(_) => ErrorKind::InvalidScopes,
            ServiceError::NotImplemented(_) => ErrorKind::NotImplemented,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::NotAvailable(_) => ErrorKind::NotAvailable,
            ServiceError::NotAuthorized(_) => ErrorKind::NotAuthorized,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    /// Error message as reported by the gateway, when the kind carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ServiceError::BadRequest(e) => Some(&e.message),
            ServiceError::InvalidParameter(e) => Some(&e.message),
            ServiceError::InvalidScopes(e) => Some(&e.message),
            ServiceError::NotImplemented(e) => Some(&e.message),
            ServiceError::NotFound(e) => Some(&e.message),
            ServiceError::InvalidCredential(_)
            | ServiceError::NotAvailable(_)
            | ServiceError::NotAuthorized(_) => None,
        }
    }
}

// Wire shapes of the error bodies. Every field is optional so that a missing
// one surfaces as a validation error rather than a decoding error.

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    message: Option<String>,
}

impl MessageBody {
    fn message(self) -> Result<String, ValidationError> {
        let mut v = ValidationError::new();
        v.require("message", &self.message);
        v.into_result()?;
        Ok(self.message.unwrap_or_default())
    }

    pub(crate) fn into_bad_request(self) -> Result<BadRequestT, ValidationError> {
        Ok(BadRequestT {
            message: self.message()?,
        })
    }

    pub(crate) fn into_not_implemented(self) -> Result<NotImplementedT, ValidationError> {
        Ok(NotImplementedT {
            message: self.message()?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InvalidParameterBody {
    name: Option<String>,
    value: Option<String>,
    message: Option<String>,
}

impl InvalidParameterBody {
    pub(crate) fn into_record(self) -> Result<InvalidParameterValue, ValidationError> {
        let mut v = ValidationError::new();
        v.require("message", &self.message);
        v.into_result()?;
        Ok(InvalidParameterValue {
            name: self.name,
            value: self.value,
            message: self.message.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InvalidScopesBody {
    id: Option<String>,
    message: Option<String>,
}

impl InvalidScopesBody {
    pub(crate) fn into_record(self) -> Result<InvalidScopesT, ValidationError> {
        let mut v = ValidationError::new();
        v.require("message", &self.message);
        v.into_result()?;
        Ok(InvalidScopesT {
            id: self.id,
            message: self.message.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NotFoundBody {
    id: Option<String>,
    message: Option<String>,
}

impl NotFoundBody {
    pub(crate) fn into_record(self) -> Result<ResourceNotFoundT, ValidationError> {
        let mut v = ValidationError::new();
        v.require("id", &self.id);
        v.require("message", &self.message);
        v.into_result()?;
        Ok(ResourceNotFoundT {
            id: self.id.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for k in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_name(k.name()), Some(k));
        }
        assert_eq!(ErrorKind::from_name("teapot"), None);
    }

    #[test]
    fn statuses_are_unique_except_for_400() {
        let four_hundreds: Vec<_> = ErrorKind::ALL
            .into_iter()
            .filter(|k| k.status() == StatusCode::BAD_REQUEST)
            .collect();
        assert_eq!(
            four_hundreds,
            vec![ErrorKind::BadRequest, ErrorKind::InvalidCredential]
        );
    }

    #[test]
    fn not_found_body_requires_id_and_message() {
        let body: NotFoundBody = serde_json::from_str(r#"{"message":"gone"}"#).unwrap();
        let err = body.into_record().unwrap_err();
        assert_eq!(err.errors()[0].field, "id");

        let body: NotFoundBody =
            serde_json::from_str(r#"{"id":"urn:x:1","message":"gone"}"#).unwrap();
        assert_eq!(
            body.into_record().unwrap(),
            ResourceNotFoundT {
                id: "urn:x:1".into(),
                message: "gone".into()
            }
        );
    }

    #[test]
    fn message_accessor() {
        let e = ServiceError::InvalidParameter(InvalidParameterValue {
            message: "top must be >=1".into(),
            ..Default::default()
        });
        assert_eq!(e.message(), Some("top must be >=1"));
        assert_eq!(e.name(), "invalid-parameter");
        assert_eq!(ServiceError::NotAvailable(ServiceNotAvailableT).message(), None);
    }
}
