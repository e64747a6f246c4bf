use crate::codec::json::Json;
use crate::codec::text::Text;
use crate::codec::{ContentType, Decodes, Encodes, Format, FormatType, NoContent};
use crate::error::{ApiClientError, FxError};
use crate::policy::Policy;
use crate::secret::SecretString;
use crate::service_error::ErrorKind;
use crate::transport::RequestBody;
use crate::validate::ValidationError;
use crate::view::{ResultView, VIEW_HEADER, Viewed, validate_all};
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use std::marker::PhantomData;

/// Why a request could not be built. Tagged with the operation by the client.
#[derive(Debug)]
pub enum RequestError {
    MissingField(&'static str),
    InvalidPayload(ValidationError),
    InvalidHeader(&'static str),
    Encoding(FxError),
}

impl RequestError {
    pub(crate) fn in_operation(self, service: &'static str, method: &'static str) -> ApiClientError {
        match self {
            RequestError::MissingField(field) => ApiClientError::MissingField {
                service,
                method,
                field,
            },
            RequestError::InvalidPayload(source) => ApiClientError::InvalidPayload {
                service,
                method,
                source,
            },
            RequestError::InvalidHeader(name) => ApiClientError::InvalidHeader {
                service,
                method,
                name,
            },
            RequestError::Encoding(source) => ApiClientError::Encoding {
                service,
                method,
                source,
            },
        }
    }
}

/// Fails with `MissingField` when `value` is empty.
pub fn require(field: &'static str, value: &str) -> Result<(), RequestError> {
    if value.is_empty() {
        Err(RequestError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Serializes `value` with `Enc` and tags it with the codec's content type.
pub fn encode_body<Enc, T>(value: &T) -> Result<RequestBody, RequestError>
where
    Enc: Encodes<T>,
{
    let bytes = Enc::encode(value).map_err(|e| RequestError::Encoding(Box::new(e)))?;
    Ok(RequestBody::Bytes {
        bytes,
        content_type: Enc::CONTENT_TYPE,
        format: Enc::FORMAT_TYPE,
    })
}

#[inline]
pub fn json_body<T: serde::Serialize>(value: &T) -> Result<RequestBody, RequestError> {
    encode_body::<Json, T>(value)
}

/// Why a success body could not be turned into a result.
#[derive(Debug)]
pub enum DecodeError {
    Decoding(FxError),
    Validation(ValidationError),
}

impl From<ValidationError> for DecodeError {
    fn from(e: ValidationError) -> Self {
        DecodeError::Validation(e)
    }
}

/// Decodes the body of a declared success status.
pub trait ResponseSpec: Send + 'static {
    type Output: Send + 'static;

    /// Accept value injected by the client; "" leaves Accept unset.
    const ACCEPT: &'static str;
    const FORMAT: Format;

    fn decode(
        status: StatusCode,
        headers: &HeaderMap,
        body: &Bytes,
    ) -> Result<Self::Output, DecodeError>;
}

/// One gateway operation.
pub trait Endpoint: Send + Sized + 'static {
    const SERVICE: &'static str;
    const NAME: &'static str;
    const METHOD: Method;

    /// Statuses decoded as success.
    const SUCCESS: &'static [StatusCode] = &[StatusCode::OK];
    /// Declared error kinds; anything else is an invalid response.
    const ERRORS: &'static [ErrorKind];

    type Response: ResponseSpec;

    fn jwt(&self) -> &SecretString;

    /// Preconditions and payload checks, run before anything is built.
    fn validate(&self) -> Result<(), RequestError> {
        Ok(())
    }

    /// Already percent-encoded request path.
    fn path(&self) -> String;

    /// Query parameters and extra headers.
    fn policy(&self, _policy: &mut Policy) -> Result<(), RequestError> {
        Ok(())
    }

    fn into_body(self) -> Result<RequestBody, RequestError> {
        Ok(RequestBody::Empty)
    }
}

fn decode_with<Dec, T>(body: &Bytes) -> Result<T, DecodeError>
where
    Dec: Decodes<T>,
{
    Dec::decode(body).map_err(|e| DecodeError::Decoding(Box::new(e)))
}

/// View name announced by the response, empty when absent.
pub fn response_view(headers: &HeaderMap) -> &str {
    headers
        .get(VIEW_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// JSON result rendered with a view. With `HEADER_VIEW` the view comes from
/// the `goa-view` response header, otherwise it is always the default one.
pub struct JsonView<V, const HEADER_VIEW: bool = false>(PhantomData<fn() -> V>);

impl<V, const HEADER_VIEW: bool> ResponseSpec for JsonView<V, HEADER_VIEW>
where
    V: ResultView + serde::de::DeserializeOwned + 'static,
    V::Result: Send + 'static,
{
    type Output = V::Result;
    const ACCEPT: &'static str = Json::CONTENT_TYPE;
    const FORMAT: Format = Json::FORMAT_TYPE;

    fn decode(_: StatusCode, headers: &HeaderMap, body: &Bytes) -> Result<V::Result, DecodeError> {
        let projected: V = decode_with::<Json, V>(body)?;
        let view = if HEADER_VIEW {
            response_view(headers)
        } else {
            ""
        };
        Ok(Viewed::new(projected, view).resolve()?)
    }
}

/// JSON array of viewed items, always in the default view.
pub struct JsonViewCollection<V>(PhantomData<fn() -> V>);

impl<V> ResponseSpec for JsonViewCollection<V>
where
    V: ResultView + serde::de::DeserializeOwned + 'static,
    V::Result: Send + 'static,
{
    type Output = Vec<V::Result>;
    const ACCEPT: &'static str = Json::CONTENT_TYPE;
    const FORMAT: Format = Json::FORMAT_TYPE;

    fn decode(_: StatusCode, _: &HeaderMap, body: &Bytes) -> Result<Self::Output, DecodeError> {
        let items: Vec<V> = decode_with::<Json, Vec<V>>(body)?;
        validate_all("items", &items, crate::view::DEFAULT_VIEW)?;
        Ok(items.into_iter().map(V::into_result).collect())
    }
}

/// Success without a body.
pub struct Empty;

impl ResponseSpec for Empty {
    type Output = ();
    const ACCEPT: &'static str = NoContent::CONTENT_TYPE;
    const FORMAT: Format = NoContent::FORMAT_TYPE;

    fn decode(_: StatusCode, _: &HeaderMap, body: &Bytes) -> Result<(), DecodeError> {
        decode_with::<NoContent, ()>(body)
    }
}

/// Raw UTF-8 body, e.g. log output.
pub struct RawText;

impl ResponseSpec for RawText {
    type Output = String;
    const ACCEPT: &'static str = "";
    const FORMAT: Format = Text::FORMAT_TYPE;

    fn decode(_: StatusCode, _: &HeaderMap, body: &Bytes) -> Result<String, DecodeError> {
        decode_with::<Text, String>(body)
    }
}
