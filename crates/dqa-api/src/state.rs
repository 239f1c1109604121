use std::sync::Arc;

use dqa_core::clock::{Clock, SystemClock};
use dqa_storage::memory::MemoryStore;
use dqa_storage::s3::S3TableStore;
use dqa_storage::sheets::auth::{ServiceAccountKey, TokenSource, DEFAULT_TOKEN_URI};
use dqa_storage::sheets::SheetsStore;
use dqa_storage::store::TableStore;

use crate::config::{CredentialSource, DqaConfig, StoreConfig, TableNames};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TableStore>,
    pub tables: TableNames,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, tables: TableNames, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            tables,
            clock,
        }
    }

    /// Build the configured store backend with the system clock.
    pub async fn from_config(config: &DqaConfig) -> eyre::Result<Self> {
        let store = build_store(&config.store).await?;
        tracing::info!(
            backend = store.backend(),
            hts_tst = %config.tables.hts_tst,
            tx_ml = %config.tables.tx_ml,
            "store ready"
        );
        Ok(Self::new(store, config.tables.clone(), Arc::new(SystemClock)))
    }
}

pub async fn build_store(config: &StoreConfig) -> eyre::Result<Arc<dyn TableStore>> {
    let store: Arc<dyn TableStore> = match config {
        StoreConfig::Memory => {
            tracing::warn!("using in-memory store; evaluations are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreConfig::S3 {
            region,
            bucket,
            prefix,
        } => {
            let client = dqa_storage::client::build_client(region.as_deref()).await;
            Arc::new(S3TableStore::new(client, bucket.clone(), prefix.clone()))
        }
        StoreConfig::GoogleSheets {
            spreadsheet_id,
            credentials,
        } => {
            let key = match credentials {
                CredentialSource::File { path } => ServiceAccountKey::from_file(path)?,
                CredentialSource::Inline {
                    client_email,
                    private_key,
                    token_uri,
                } => ServiceAccountKey {
                    client_email: client_email.clone(),
                    private_key: private_key.clone(),
                    token_uri: token_uri
                        .clone()
                        .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
                },
            };
            Arc::new(SheetsStore::new(spreadsheet_id.clone(), TokenSource::new(key)))
        }
    };
    Ok(store)
}
