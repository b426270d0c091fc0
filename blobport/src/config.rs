use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{ExportError, Result};

/// Default lifetime of a generated SAS token, in seconds.
pub const DEFAULT_SAS_TTL_SECS: u64 = 3600;

/// Raw shape of the JSON config file. Every key is optional at parse time so
/// required-key checks happen in one pass in the `TryFrom` below instead of
/// surfacing one serde error at a time. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    /// Destination container name
    pub(crate) container: Option<String>,
    /// Remote path prefix; for account-key auth this also serves as the
    /// account's base service URL
    pub(crate) path_prefix: Option<String>,
    /// Local directory to upload from
    pub(crate) input_path: Option<String>,
    /// Full service connection string, wins over the account key pair
    pub(crate) connect_string: Option<String>,
    /// Storage account name, consulted only without `connect_string`
    pub(crate) account_name: Option<String>,
    /// Storage account key, consulted only without `connect_string`
    pub(crate) account_key: Option<String>,
    /// Lifetime of the generated SAS token in seconds
    pub(crate) sas_ttl_secs: Option<u64>,
}

/// Validated configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub container: String,
    pub path_prefix: String,
    pub input_path: PathBuf,
    pub credentials: Credentials,
    pub sas_ttl_secs: u64,
}

/// How the storage client authenticates. A present, non-empty
/// `connect_string` always wins; the account key pair is only consulted
/// when no connection string is given.
#[derive(Debug, Clone)]
pub enum Credentials {
    ConnectionString(String),
    AccountKey { account: String, key: String },
}

impl ExportConfig {
    /// Read and parse the JSON config file at `path`, then validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig =
            serde_json::from_str(&contents).map_err(|source| ExportError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        raw.try_into()
    }
}

/// Empty strings count as absent, matching how the keys behave when left
/// blank by config templating.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<RawConfig> for ExportConfig {
    type Error = ExportError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let container = non_empty(raw.container);
        let path_prefix = non_empty(raw.path_prefix);
        let input_path = non_empty(raw.input_path);

        let mut missing = Vec::new();
        if container.is_none() {
            missing.push("container");
        }
        if path_prefix.is_none() {
            missing.push("path_prefix");
        }
        if input_path.is_none() {
            missing.push("input_path");
        }
        let (Some(container), Some(path_prefix), Some(input_path)) =
            (container, path_prefix, input_path)
        else {
            return Err(ExportError::MissingConfigKey { keys: missing });
        };

        let credentials = match non_empty(raw.connect_string) {
            Some(connect_string) => Credentials::ConnectionString(connect_string),
            None => match (non_empty(raw.account_name), non_empty(raw.account_key)) {
                (Some(account), Some(key)) => Credentials::AccountKey { account, key },
                _ => return Err(ExportError::AuthenticationConfig),
            },
        };

        Ok(ExportConfig {
            container,
            path_prefix,
            input_path: PathBuf::from(input_path),
            credentials,
            sas_ttl_secs: raw.sas_ttl_secs.unwrap_or(DEFAULT_SAS_TTL_SECS),
        })
    }
}
