use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors surfaced by an export run. Nothing here is recovered locally: the
/// first error aborts the run and reaches the process boundary. Blobs already
/// uploaded before the failure stay where they are.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unable to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required config keys: {}", .keys.join(", "))]
    MissingConfigKey { keys: Vec<&'static str> },

    #[error("no usable credentials: set connect_string, or both account_name and account_key")]
    AuthenticationConfig,

    #[error("storage service rejected the credentials: {0}")]
    ServiceConnect(String),

    #[error("unable to walk {path}: {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error("unable to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upload to {container}:{blob} failed: {reason}")]
    Upload {
        container: String,
        blob: String,
        reason: String,
    },
}
