use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::state;
use crate::store::{BoxFuture, TableStore};

/// On-disk shape of one table object.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTable {
    values: Vec<Vec<String>>,
}

/// Tables kept as JSON objects under `{prefix}tables/{name}.json`.
///
/// Appends are read-modify-write guarded by the object's ETag. A lost race
/// surfaces as `PreconditionFailed`; the caller decides whether to resubmit.
pub struct S3TableStore {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3TableStore {
    pub fn new(client: Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    pub fn table_key(&self, table: &str) -> String {
        format!("{}tables/{table}.json", self.prefix)
    }
}

impl TableStore for S3TableStore {
    fn backend(&self) -> &str {
        "s3"
    }

    fn get_all_values<'a>(
        &'a self,
        table: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Vec<String>>, StorageError>> {
        Box::pin(async move {
            let key = self.table_key(table);
            let stored = state::load_json::<StoredTable>(&self.client, &self.bucket, &key).await?;
            Ok(stored.map(|(t, _)| t.values).unwrap_or_default())
        })
    }

    fn append_rows<'a>(
        &'a self,
        table: &'a str,
        rows: Vec<Vec<String>>,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let key = self.table_key(table);
            let (mut stored, etag) =
                match state::load_json::<StoredTable>(&self.client, &self.bucket, &key).await? {
                    Some((stored, etag)) => (stored, Some(etag)),
                    None => (StoredTable::default(), None),
                };

            stored.values.extend(rows);
            let new_etag = state::save_json(
                &self.client,
                &self.bucket,
                &key,
                &stored,
                etag.as_deref(),
            )
            .await?;

            tracing::debug!(
                bucket = %self.bucket,
                key = %key,
                etag = %new_etag,
                rows = stored.values.len(),
                "table object written"
            );
            Ok(())
        })
    }
}
