mod auth;
mod client;
mod codec;
mod config;
mod debug;
pub mod decode;
mod endpoint;
pub mod error;
mod policy;
mod request;
mod secret;
pub mod service_error;
pub mod transport;
mod types;
pub mod validate;
pub mod view;

pub mod internal {
    #[doc(hidden)]
    pub use crate::codec::{ContentType, Decodes, Encodes, Format, FormatType};
    #[doc(hidden)]
    pub use crate::endpoint::{
        DecodeError, Empty, JsonView, JsonViewCollection, RawText, RequestError, ResponseSpec,
        encode_body, json_body, require, response_view,
    };
}

pub mod prelude {
    pub use crate::auth::authorization_value;
    pub use crate::client::ApiClient;
    pub use crate::codec::json::Json;
    pub use crate::codec::{NoContent, text::Text};
    pub use crate::config::ClientConfig;
    pub use crate::debug::{DebugLevel, DebugSink, NoopDebugSink, StderrDebugSink, TracingDebugSink};
    pub use crate::endpoint::Endpoint;
    pub use crate::error::{ApiClientError, FxError};
    pub use crate::policy::Policy;
    pub use crate::request::{PendingRequest, TimeoutOverride};
    pub use crate::secret::SecretString;
    pub use crate::service_error::{ErrorKind, ServiceError};
    pub use crate::transport::{BodyStream, DecodedResponse, RequestBody, RequestMeta};
    pub use crate::transport::{ReqwestTransport, Transport};
    pub use crate::types::UrlPath;
    pub use crate::validate::ValidationError;
    pub use crate::view::{DEFAULT_VIEW, ResultView, Viewed};
}
