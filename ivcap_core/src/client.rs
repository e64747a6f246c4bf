use crate::auth::authorization_value;
use crate::config::ClientConfig;
use crate::debug::{DebugLevel, DebugSink, StderrDebugSink};
use crate::decode::{Disposition, classify, decode_service_error};
use crate::endpoint::{DecodeError, Endpoint, RequestError, ResponseSpec};
use crate::error::{ApiClientError, body_as_text};
use crate::policy::Policy;
use crate::request::{PendingRequest, TimeoutOverride};
use crate::transport::{BuiltRequest, DecodedResponse, RequestBody, RequestMeta};
use crate::transport::{ReqwestTransport, Transport, read_body_all};
use crate::types::has_dot_segment;
use crate::validate::{FieldErrorKind, ValidationError};
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderValue;
use std::sync::Arc;

/// Executes endpoints against one gateway.
///
/// Holds no mutable state: clones share the transport and the debug sink.
#[derive(Clone)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
    debug_sink: Arc<dyn DebugSink>,
}

impl ApiClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_reqwest_client(config, reqwest::Client::new())
    }

    pub fn with_reqwest_client(config: ClientConfig, client: reqwest::Client) -> Self {
        Self::with_transport(config, ReqwestTransport::new(client))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            transport,
            config,
            debug_sink: Arc::new(StderrDebugSink),
        }
    }

    #[inline]
    pub fn with_debug_sink(mut self, sink: impl DebugSink) -> Self {
        self.debug_sink = Arc::new(sink);
        self
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[inline]
    pub fn debug_level(&self) -> DebugLevel {
        self.config.debug_level
    }

    #[inline]
    pub fn request<E: Endpoint>(&self, ep: E) -> PendingRequest<'_, E, T> {
        PendingRequest::new(self, ep)
    }

    #[inline]
    pub async fn execute<E: Endpoint>(
        &self,
        ep: E,
    ) -> Result<<E::Response as ResponseSpec>::Output, ApiClientError> {
        self.request(ep).execute().await
    }

    pub(crate) async fn execute_decoded_with<E: Endpoint>(
        &self,
        ep: E,
        dbg: DebugLevel,
        timeout: TimeoutOverride,
    ) -> Result<DecodedResponse<<E::Response as ResponseSpec>::Output>, ApiClientError> {
        let meta = RequestMeta {
            service: E::SERVICE,
            operation: E::NAME,
            method: E::METHOD,
        };
        let built = self.build_request(ep, meta, timeout)?;
        let url = built.url.clone();
        let url_str = url.as_str().to_string();
        let meta = built.meta.clone();

        if dbg.is_verbose() {
            self.debug_sink.request_start(dbg, &meta, &url_str);
        }
        if dbg.is_very_verbose() {
            self.debug_sink.request_headers(dbg, &built.headers);
            match &built.body {
                RequestBody::Empty => {}
                RequestBody::Bytes { bytes, format, .. } => {
                    self.debug_sink.request_body(dbg, Some(bytes), *format)
                }
                RequestBody::Stream(_) => {
                    self.debug_sink
                        .request_body(dbg, None, crate::codec::Format::Binary)
                }
            }
        }

        let mut resp =
            self.transport
                .send(built)
                .await
                .map_err(|source| ApiClientError::Request {
                    service: E::SERVICE,
                    method: E::NAME,
                    source,
                })?;
        let status = resp.status;
        let headers = resp.headers;

        if dbg.is_verbose() {
            self.debug_sink.response_status(dbg, &meta, status, &url_str);
        }
        if dbg.is_very_verbose() {
            self.debug_sink.response_headers(dbg, &headers);
        }

        let disposition = classify(status, &headers, E::SUCCESS, E::ERRORS);
        let body = if disposition.reads_body() {
            read_body_all(resp.body.as_mut())
                .await
                .map_err(|source| ApiClientError::Request {
                    service: E::SERVICE,
                    method: E::NAME,
                    source,
                })?
        } else {
            Bytes::new()
        };
        // Dropping the transport body releases the connection.
        drop(resp.body);

        if dbg.is_very_verbose() && !body.is_empty() {
            self.debug_sink
                .response_body(dbg, &body, <E::Response as ResponseSpec>::FORMAT);
        }

        let decode_err = |e: DecodeError| match e {
            DecodeError::Decoding(source) => ApiClientError::Decoding {
                service: E::SERVICE,
                method: E::NAME,
                source,
                body: body_as_text(&headers, &body),
            },
            DecodeError::Validation(source) => ApiClientError::Validation {
                service: E::SERVICE,
                method: E::NAME,
                source,
            },
        };

        match disposition {
            Disposition::Success => {
                let value = <E::Response as ResponseSpec>::decode(status, &headers, &body)
                    .map_err(decode_err)?;
                let raw_body = self.config.restore_response_body.then(|| body.clone());
                Ok(DecodedResponse {
                    meta,
                    url,
                    status,
                    headers,
                    value,
                    raw_body,
                })
            }
            Disposition::Error(kind) => {
                let source = decode_service_error(kind, &body).map_err(decode_err)?;
                Err(ApiClientError::Service {
                    service: E::SERVICE,
                    method: E::NAME,
                    source,
                })
            }
            Disposition::Unexpected => Err(ApiClientError::InvalidResponse {
                service: E::SERVICE,
                method: E::NAME,
                status,
                body: body_as_text(&headers, &body),
            }),
        }
    }

    fn build_request<E: Endpoint>(
        &self,
        ep: E,
        meta: RequestMeta,
        timeout: TimeoutOverride,
    ) -> Result<BuiltRequest, ApiClientError> {
        let tag = |e: RequestError| e.in_operation(E::SERVICE, E::NAME);

        ep.validate().map_err(tag)?;
        if ep.jwt().is_empty() {
            return Err(tag(RequestError::MissingField("jwt")));
        }
        let auth = authorization_value(ep.jwt())
            .ok_or_else(|| tag(RequestError::InvalidHeader("Authorization")))?;

        let mut policy = Policy::new();
        policy.set_timeout(self.config.timeout);
        policy.insert_header(AUTHORIZATION, auth);
        ep.policy(&mut policy).map_err(tag)?;
        policy.ensure_accept(<E::Response as ResponseSpec>::ACCEPT);
        timeout.apply(&mut policy);

        let path = ep.path();
        if has_dot_segment(&path) {
            let mut v = ValidationError::new();
            v.push(
                "path",
                FieldErrorKind::Format {
                    value: path,
                    format: "path without dot segments",
                },
            );
            return Err(tag(RequestError::InvalidPayload(v)));
        }
        let base = self.config.base_url();
        let mut url = url::Url::parse(&base).map_err(|source| ApiClientError::InvalidUrl {
            service: E::SERVICE,
            method: E::NAME,
            url: format!("{base}{path}"),
            source,
        })?;
        url.set_path(&path);

        let (mut headers, query, timeout) = policy.into_parts();
        if !query.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in query.iter() {
                qp.append_pair(k, v);
            }
        }

        let body = ep.into_body().map_err(tag)?;
        if let RequestBody::Bytes { content_type, .. } = &body
            && !content_type.is_empty()
            && !headers.contains_key(CONTENT_TYPE)
        {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(*content_type));
        }

        Ok(BuiltRequest {
            meta,
            url,
            headers,
            body,
            timeout,
        })
    }
}
