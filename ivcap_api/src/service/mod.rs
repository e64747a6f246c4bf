//! Services: registered analytics that orders run.

pub mod endpoints;
pub mod paths;
pub mod types;
pub mod views;

use endpoints::{CreatePayload, DeletePayload, ListPayload, ReadPayload, UpdatePayload};
use ivcap_core::prelude::{ApiClient, ApiClientError, Transport};
use types::{ServiceListRT, ServiceStatusRT};

pub struct Services<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Services<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, p: ListPayload) -> Result<ServiceListRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn create(&self, p: CreatePayload) -> Result<ServiceStatusRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn read(&self, p: ReadPayload) -> Result<ServiceStatusRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn update(&self, p: UpdatePayload) -> Result<ServiceStatusRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn delete(&self, p: DeletePayload) -> Result<(), ApiClientError> {
        self.client.execute(p).await
    }
}
