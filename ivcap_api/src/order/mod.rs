//! Orders: requests to run a service, their status, logs and resource usage.

pub mod endpoints;
pub mod paths;
pub mod types;
pub mod views;

use endpoints::{CreatePayload, ListPayload, LogsPayload, ReadPayload, TopPayload};
use ivcap_core::prelude::{ApiClient, ApiClientError, Transport};
use types::{OrderListRT, OrderStatusRT, OrderTopResultItem};

pub struct Orders<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Orders<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, p: ListPayload) -> Result<OrderListRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn read(&self, p: ReadPayload) -> Result<OrderStatusRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn create(&self, p: CreatePayload) -> Result<OrderStatusRT, ApiClientError> {
        self.client.execute(p).await
    }

    /// Raw log output of the order's containers.
    pub async fn logs(&self, p: LogsPayload) -> Result<String, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn top(&self, p: TopPayload) -> Result<Vec<OrderTopResultItem>, ApiClientError> {
        self.client.execute(p).await
    }
}
