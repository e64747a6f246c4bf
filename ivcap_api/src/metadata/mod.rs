//! Metadata: schema-typed records attached to any entity.

pub mod endpoints;
pub mod paths;
pub mod types;
pub mod views;

use endpoints::{AddRequestData, ReadPayload, RevokePayload};
use ivcap_core::prelude::{ApiClient, ApiClientError, Transport};
use types::{AddMetaRT, ReadMetaRT};

pub struct Metadata<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Metadata<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn read(&self, p: ReadPayload) -> Result<ReadMetaRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn add(&self, data: AddRequestData) -> Result<AddMetaRT, ApiClientError> {
        self.client.execute(data).await
    }

    pub async fn revoke(&self, p: RevokePayload) -> Result<(), ApiClientError> {
        self.client.execute(p).await
    }
}
