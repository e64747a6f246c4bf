//! Maps a response status (and the `goa-error` discriminator) onto the
//! outcome an endpoint declared.

use crate::codec::Decodes;
use crate::codec::json::Json;
use crate::endpoint::DecodeError;
use crate::service_error::{
    ERROR_HEADER, ErrorKind, InvalidCredentialsT, InvalidParameterBody, InvalidScopesBody,
    MessageBody, NotFoundBody, ServiceError, ServiceNotAvailableT, UnauthorizedT,
};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Disposition {
    Success,
    Error(ErrorKind),
    /// Status, or 400 discriminator, the endpoint never declared.
    Unexpected,
}

impl Disposition {
    /// Whether the body has to be read before the outcome can be built.
    /// 401 and 503 bodies are never read.
    pub fn reads_body(self) -> bool {
        match self {
            Disposition::Success | Disposition::Unexpected => true,
            Disposition::Error(kind) => kind.has_body(),
        }
    }
}

pub fn classify(
    status: StatusCode,
    headers: &HeaderMap,
    success: &[StatusCode],
    errors: &[ErrorKind],
) -> Disposition {
    if success.contains(&status) {
        return Disposition::Success;
    }
    if status == StatusCode::BAD_REQUEST {
        let name = headers
            .get(ERROR_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        return match ErrorKind::from_name(name) {
            Some(kind) if kind.status() == status && errors.contains(&kind) => {
                Disposition::Error(kind)
            }
            _ => Disposition::Unexpected,
        };
    }
    errors
        .iter()
        .copied()
        .find(|k| k.status() == status)
        .map_or(Disposition::Unexpected, Disposition::Error)
}

fn parse<T: DeserializeOwned>(body: &Bytes) -> Result<T, DecodeError> {
    <Json as Decodes<T>>::decode(body).map_err(|e| DecodeError::Decoding(Box::new(e)))
}

/// Builds the typed rejection for `kind`; `body` is ignored for bodiless kinds.
pub fn decode_service_error(kind: ErrorKind, body: &Bytes) -> Result<ServiceError, DecodeError> {
    Ok(match kind {
        ErrorKind::BadRequest => {
            ServiceError::BadRequest(parse::<MessageBody>(body)?.into_bad_request()?)
        }
        ErrorKind::NotImplemented => {
            ServiceError::NotImplemented(parse::<MessageBody>(body)?.into_not_implemented()?)
        }
        ErrorKind::InvalidParameter => {
            ServiceError::InvalidParameter(parse::<InvalidParameterBody>(body)?.into_record()?)
        }
        ErrorKind::InvalidScopes => {
            ServiceError::InvalidScopes(parse::<InvalidScopesBody>(body)?.into_record()?)
        }
        ErrorKind::NotFound => ServiceError::NotFound(parse::<NotFoundBody>(body)?.into_record()?),
        ErrorKind::InvalidCredential => ServiceError::InvalidCredential(InvalidCredentialsT),
        ErrorKind::NotAvailable => ServiceError::NotAvailable(ServiceNotAvailableT),
        ErrorKind::NotAuthorized => ServiceError::NotAuthorized(UnauthorizedT),
    })
}
