use azure_core::auth::Secret;
use azure_storage::shared_access_signature::{
    account_sas::{
        AccountSasPermissions, AccountSasResource, AccountSasResourceType,
        AccountSharedAccessSignature,
    },
    SasToken,
};
use azure_storage::{CloudLocation, ConnectionString, StorageCredentials};
use azure_storage_blobs::prelude::{BlobServiceClient, ClientBuilder};
use time::OffsetDateTime;

use crate::config::{Credentials, ExportConfig};
use crate::errors::{ExportError, Result};

/// Build the one service client an export run uses for every upload.
///
/// Credential resolution already happened at config load; this only turns the
/// chosen credential into a client. The SDK validates credentials lazily, so
/// a wrong secret typically surfaces on the first upload rather than here.
pub fn build_service_client(cfg: &ExportConfig) -> Result<BlobServiceClient> {
    match &cfg.credentials {
        Credentials::ConnectionString(raw) => {
            let conn = ConnectionString::new(raw)
                .map_err(|e| ExportError::ServiceConnect(format!("connection string: {}", e)))?;
            let account = conn
                .account_name
                .ok_or_else(|| {
                    ExportError::ServiceConnect("connection string has no AccountName".to_string())
                })?
                .to_string();
            let credentials = conn
                .storage_credentials()
                .map_err(|e| ExportError::ServiceConnect(format!("connection string: {}", e)))?;
            Ok(BlobServiceClient::new(account, credentials))
        }
        Credentials::AccountKey { account, key } => {
            let token = account_sas_token(account, key, cfg.sas_ttl_secs)?;
            let credentials = StorageCredentials::sas_token(token)
                .map_err(|e| ExportError::ServiceConnect(format!("sas credential: {}", e)))?;
            // For key-based auth the config's path_prefix doubles as the
            // account's base service URL.
            let location = CloudLocation::Custom {
                account: account.clone(),
                uri: cfg.path_prefix.trim_end_matches('/').to_string(),
            };
            Ok(ClientBuilder::with_location(location, credentials).blob_service_client())
        }
    }
}

/// Permissions carried by generated SAS tokens: object-level CRUD plus list,
/// no account management rights.
pub(crate) fn export_permissions() -> AccountSasPermissions {
    AccountSasPermissions {
        read: true,
        add: true,
        create: true,
        write: true,
        delete: true,
        list: true,
        ..AccountSasPermissions::default()
    }
}

/// Expiry timestamp for a token generated now.
pub(crate) fn sas_expiry(ttl_secs: u64) -> OffsetDateTime {
    OffsetDateTime::now_utc() + time::Duration::seconds(ttl_secs as i64)
}

/// Generate an account SAS token scoped to blob object access, expiring
/// `ttl_secs` after generation time.
pub(crate) fn account_sas_token(account: &str, key: &str, ttl_secs: u64) -> Result<String> {
    let signature = AccountSharedAccessSignature::new(
        account.to_string(),
        Secret::new(key.to_string()),
        AccountSasResource::Blob,
        AccountSasResourceType::Object,
        sas_expiry(ttl_secs),
        export_permissions(),
    );
    signature
        .token()
        .map_err(|e| ExportError::ServiceConnect(format!("sas token: {}", e)))
}
