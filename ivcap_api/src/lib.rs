//! Typed client for the IVCAP gateway.
//!
//! Each resource module holds its domain types, wire views, path builders and
//! endpoints; [`IvcapClient`] ties them to one configured [`ApiClient`].

#[macro_use]
mod macros;

pub mod artifact;
pub mod common;
pub mod metadata;
pub mod order;
pub mod service;

use ivcap_core::prelude::{
    ApiClient, ApiClientError, ClientConfig, DebugSink, Endpoint, PendingRequest, ReqwestTransport,
    Transport,
};

pub mod prelude {
    pub use crate::IvcapClient;
    pub use crate::common::{ListQuery, ParameterT};
    pub use ivcap_core::prelude::*;
}

#[derive(Clone)]
pub struct IvcapClient<T: Transport = ReqwestTransport> {
    api: ApiClient<T>,
}

impl IvcapClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    /// Configuration from `IVCAP_*` variables, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, ApiClientError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl<T: Transport> IvcapClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            api: ApiClient::with_transport(config, transport),
        }
    }

    pub fn with_debug_sink(mut self, sink: impl DebugSink) -> Self {
        self.api = self.api.with_debug_sink(sink);
        self
    }

    #[inline]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Any endpoint, with per-request overrides.
    #[inline]
    pub fn request<E: Endpoint>(&self, ep: E) -> PendingRequest<'_, E, T> {
        self.api.request(ep)
    }

    pub fn artifacts(&self) -> artifact::Artifacts<'_, T> {
        artifact::Artifacts::new(&self.api)
    }

    pub fn orders(&self) -> order::Orders<'_, T> {
        order::Orders::new(&self.api)
    }

    pub fn services(&self) -> service::Services<'_, T> {
        service::Services::new(&self.api)
    }

    pub fn metadata(&self) -> metadata::Metadata<'_, T> {
        metadata::Metadata::new(&self.api)
    }
}

impl<T: Transport> From<ApiClient<T>> for IvcapClient<T> {
    fn from(api: ApiClient<T>) -> Self {
        Self { api }
    }
}
