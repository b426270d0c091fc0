use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::client::build_service_client;
use crate::config::ExportConfig;
use crate::errors::{ExportError, Result};
use crate::store::{AzureBlobStore, BlobStore};

/// Walk `input_path` and upload every regular file through `store`, strictly
/// one at a time in walk order. The first failed walk step, read, or upload
/// aborts the run; blobs already uploaded stay put and later files are never
/// attempted. Returns the number of files uploaded.
///
/// Symlinks are not followed (walkdir default). An empty tree uploads
/// nothing and succeeds.
pub async fn upload_tree(store: &dyn BlobStore, cfg: &ExportConfig) -> Result<u64> {
    let mut uploaded = 0u64;
    for entry in WalkDir::new(&cfg.input_path) {
        let entry = entry.map_err(|e| ExportError::Walk {
            path: cfg.input_path.clone(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let local = entry.path();
        let rel = match local.strip_prefix(&cfg.input_path) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel,
            _ => continue,
        };
        let blob = join_remote(&cfg.path_prefix, rel);
        let data = tokio::fs::read(local)
            .await
            .map_err(|source| ExportError::FileRead {
                path: local.to_path_buf(),
                source,
            })?;
        debug!(container = %cfg.container, blob = %blob, "uploading");
        store.put_blob(&cfg.container, &blob, data).await?;
        uploaded += 1;
    }
    Ok(uploaded)
}

/// Join a root-relative local path under the remote prefix, always with `/`
/// separators regardless of platform.
pub(crate) fn join_remote(prefix: &str, rel: &Path) -> String {
    let rel = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if prefix.is_empty() {
        rel
    } else if prefix.ends_with('/') {
        format!("{}{}", prefix, rel)
    } else {
        format!("{}/{}", prefix, rel)
    }
}

/// One full export pass: build the service client from the config, then walk
/// and upload the input tree.
pub async fn run_export(cfg: &ExportConfig) -> Result<u64> {
    info!("Exporting data...");
    let client = build_service_client(cfg)?;
    let store = AzureBlobStore::new(client);
    let uploaded = upload_tree(&store, cfg).await?;
    info!(files = uploaded, "Data exported.");
    Ok(uploaded)
}
