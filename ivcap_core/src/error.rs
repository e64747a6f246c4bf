use crate::service_error::{ErrorKind, ServiceError};
use crate::transport::TransportError;
use crate::validate::ValidationError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD as B64;
use http::{HeaderMap, StatusCode};
use std::error::Error;
use thiserror::Error;

pub type FxError = Box<dyn Error + Send + Sync>;

/// Every way a gateway operation can fail.
///
/// Infrastructure failures (`Request`, `Decoding`, `Validation`,
/// `InvalidResponse`, ...) are kept apart from `Service`, which carries the
/// typed rejection the gateway answered with.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiClientError {
    #[error("{service}.{method}: missing required field `{field}`")]
    MissingField {
        service: &'static str,
        method: &'static str,
        field: &'static str,
    },

    #[error("{service}.{method}: invalid payload: {source}")]
    InvalidPayload {
        service: &'static str,
        method: &'static str,
        source: ValidationError,
    },

    #[error("{service}.{method}: invalid URL {url:?}: {source}")]
    InvalidUrl {
        service: &'static str,
        method: &'static str,
        url: String,
        source: url::ParseError,
    },

    #[error("{service}.{method}: value of header `{name}` is not representable")]
    InvalidHeader {
        service: &'static str,
        method: &'static str,
        name: &'static str,
    },

    #[error("{service}.{method}: encoding error: {source}")]
    Encoding {
        service: &'static str,
        method: &'static str,
        source: FxError,
    },

    #[error("{service}.{method}: request failed: {source}")]
    Request {
        service: &'static str,
        method: &'static str,
        source: TransportError,
    },

    #[error("{service}.{method}: decoding error: {source}")]
    Decoding {
        service: &'static str,
        method: &'static str,
        source: FxError,
        body: String,
    },

    #[error("{service}.{method}: invalid response: {source}")]
    Validation {
        service: &'static str,
        method: &'static str,
        source: ValidationError,
    },

    #[error("{service}.{method}: unexpected response status {status}: {body}")]
    InvalidResponse {
        service: &'static str,
        method: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("{service}.{method}: {source}")]
    Service {
        service: &'static str,
        method: &'static str,
        source: ServiceError,
    },

    #[error("configuration: {0}")]
    Config(String),
}

impl ApiClientError {
    /// The typed gateway rejection, if this is one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            ApiClientError::Service { source, .. } => Some(source),
            _ => None,
        }
    }

    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        self.service_error().map(ServiceError::kind)
    }

    /// True when the request never produced a response.
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiClientError::Request { .. })
    }

    pub fn operation(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ApiClientError::MissingField { service, method, .. }
            | ApiClientError::InvalidPayload { service, method, .. }
            | ApiClientError::InvalidUrl { service, method, .. }
            | ApiClientError::InvalidHeader { service, method, .. }
            | ApiClientError::Encoding { service, method, .. }
            | ApiClientError::Request { service, method, .. }
            | ApiClientError::Decoding { service, method, .. }
            | ApiClientError::Validation { service, method, .. }
            | ApiClientError::InvalidResponse { service, method, .. }
            | ApiClientError::Service { service, method, .. } => Some((service, method)),
            ApiClientError::Config(_) => None,
        }
    }
}

/// Renders a (possibly binary) body for error messages, capped at 8 KiB.
pub fn body_as_text(headers: &HeaderMap, body: &bytes::Bytes) -> String {
    const MAX: usize = 8 * 1024;
    let ct = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let slice = if body.len() > MAX {
        &body[..MAX]
    } else {
        &body[..]
    };
    // Gateway error bodies frequently come without a Content-Type.
    let texty = ct.is_empty() || ct.starts_with("application/json") || ct.starts_with("text/");
    if texty {
        let truncated = body.len() > slice.len();
        let text = match std::str::from_utf8(slice) {
            Ok(s) => Some(s),
            // The cut split a character: keep everything before it.
            Err(e) if truncated && e.error_len().is_none() => {
                std::str::from_utf8(&slice[..e.valid_up_to()]).ok()
            }
            Err(_) => None,
        };
        match text {
            Some(s) if truncated => format!("{}...", s),
            Some(s) => s.to_owned(),
            None => format!("<non-utf8-text; {} bytes>", body.len()),
        }
    } else {
        let b64 = B64.encode(slice);
        format!(
            "<non-text; {} bytes; base64:{}{}>",
            body.len(),
            &b64[..b64.len().min(1024)],
            if b64.len() > 1024 { "..." } else { "" }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn body_as_text_keeps_json_and_encodes_binary() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        assert_eq!(
            body_as_text(&headers, &Bytes::from_static(b"{\"a\":1}")),
            "{\"a\":1}"
        );

        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/octet-stream"),
        );
        let s = body_as_text(&headers, &Bytes::from_static(&[0, 1, 2]));
        assert_eq!(s, "<non-text; 3 bytes; base64:AAEC>");
    }

    #[test]
    fn body_as_text_truncates_large_bodies() {
        let big = Bytes::from(vec![b'x'; 9000]);
        let s = body_as_text(&HeaderMap::new(), &big);
        assert!(s.ends_with("..."));
        assert_eq!(s.len(), 8 * 1024 + 3);
    }

    #[test]
    fn truncation_never_splits_a_character() {
        let mut raw = vec![b'x'; 8 * 1024 - 1];
        raw.extend_from_slice("é".as_bytes());
        let s = body_as_text(&HeaderMap::new(), &Bytes::from(raw));
        assert_eq!(s.len(), 8 * 1024 - 1 + 3);
        assert!(s.starts_with("xxx") && s.ends_with("x..."));
    }

    #[test]
    fn invalid_utf8_is_reported_by_size() {
        let s = body_as_text(&HeaderMap::new(), &Bytes::from_static(&[b'a', 0xff, b'b']));
        assert_eq!(s, "<non-utf8-text; 3 bytes>");
    }

    #[test]
    fn service_error_accessors() {
        let e = ApiClientError::Service {
            service: "artifact",
            method: "read",
            source: ServiceError::NotAuthorized(Default::default()),
        };
        assert_eq!(e.kind(), Some(ErrorKind::NotAuthorized));
        assert_eq!(e.operation(), Some(("artifact", "read")));
        assert!(!e.is_transport());
    }
}
