use async_trait::async_trait;
use azure_storage_blobs::prelude::BlobServiceClient;

use crate::errors::{ExportError, Result};

/// Narrow view over the blob service used by the exporter: one blob write per
/// call, overwriting whatever already lives at that path. No listing, no
/// reads, no conflict checks.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put_blob(&self, container: &str, blob_path: &str, data: Vec<u8>) -> Result<()>;
}

/// Production store backed by the Azure SDK service client.
pub struct AzureBlobStore {
    service: BlobServiceClient,
}

impl AzureBlobStore {
    pub fn new(service: BlobServiceClient) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn put_blob(&self, container: &str, blob_path: &str, data: Vec<u8>) -> Result<()> {
        self.service
            .container_client(container)
            .blob_client(blob_path)
            .put_block_blob(data)
            .await
            .map_err(|e| ExportError::Upload {
                container: container.to_string(),
                blob: blob_path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
