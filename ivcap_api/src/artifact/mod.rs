//! Artifacts: uploaded content, its collections and its metadata.

pub mod endpoints;
pub mod paths;
pub mod types;
pub mod views;

use endpoints::{
    AddCollectionPayload, AddMetadataPayload, ListPayload, ReadPayload, RemoveCollectionPayload,
    RemoveMetadataPayload, UploadRequestData,
};
use ivcap_core::prelude::{ApiClient, ApiClientError, Transport};
use types::{ArtifactListRT, ArtifactStatusRT};

pub struct Artifacts<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> Artifacts<'a, T> {
    pub(crate) fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn list(&self, p: ListPayload) -> Result<ArtifactListRT, ApiClientError> {
        self.client.execute(p).await
    }

    /// Streams the content; the result carries the TUS headers of the reply.
    pub async fn upload(&self, data: UploadRequestData) -> Result<ArtifactStatusRT, ApiClientError> {
        self.client.execute(data).await
    }

    pub async fn read(&self, p: ReadPayload) -> Result<ArtifactStatusRT, ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn add_collection(&self, p: AddCollectionPayload) -> Result<(), ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn remove_collection(&self, p: RemoveCollectionPayload) -> Result<(), ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn add_metadata(&self, p: AddMetadataPayload) -> Result<(), ApiClientError> {
        self.client.execute(p).await
    }

    pub async fn remove_metadata(&self, p: RemoveMetadataPayload) -> Result<(), ApiClientError> {
        self.client.execute(p).await
    }
}
