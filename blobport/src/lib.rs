mod client;
mod config;
mod errors;
mod store;
mod uploader;

pub use client::build_service_client;
pub use config::{Credentials, ExportConfig, DEFAULT_SAS_TTL_SECS};
pub use errors::{ExportError, Result};
pub use store::{AzureBlobStore, BlobStore};
pub use uploader::{run_export, upload_tree};

// Unit tests
#[cfg(test)]
mod client_test;
